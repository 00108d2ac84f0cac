use serde::{Deserialize, Serialize};

use crate::{Creator, FeaturedAgent, StoreAgent};

/// Everything the storefront renders, as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub featured: Vec<FeaturedAgent>,
    #[serde(default)]
    pub agents: Vec<StoreAgent>,
    #[serde(default)]
    pub creators: Vec<Creator>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.agents.is_empty() && self.creators.is_empty()
    }

    /// Resolve a slug to its detail route, searching featured listings first.
    pub fn route_for(&self, slug: &str) -> Option<String> {
        self.featured
            .iter()
            .find(|a| a.slug == slug)
            .map(FeaturedAgent::path)
            .or_else(|| {
                self.agents
                    .iter()
                    .find(|a| a.slug == slug)
                    .map(StoreAgent::path)
            })
    }
}
