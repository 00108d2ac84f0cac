use serde::{Deserialize, Serialize};

use crate::route::agent_path;

/// A listing shown in the featured carousel.
///
/// Field aliases accept the camelCase names used by the web storefront, so
/// catalogs exported from it load without conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedAgent {
    pub slug: String,
    #[serde(alias = "agentName")]
    pub agent_name: String,
    #[serde(default, alias = "agentImage")]
    pub agent_image: String,
    #[serde(alias = "creatorName")]
    pub creator_name: String,
    #[serde(default, alias = "creatorAvatar")]
    pub creator_avatar: String,
    #[serde(default, alias = "subHeading")]
    pub sub_heading: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub runs: Option<u64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl FeaturedAgent {
    /// Navigation target for this listing.
    pub fn path(&self) -> String {
        agent_path(&self.creator_name, &self.slug)
    }

    /// Rating, if present and finite.
    pub fn rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite())
    }
}

/// A row in the top-agents table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreAgent {
    pub slug: String,
    #[serde(alias = "agentName")]
    pub agent_name: String,
    #[serde(default, alias = "agentImage")]
    pub agent_image: String,
    pub creator: String,
    #[serde(default, alias = "creatorAvatar")]
    pub creator_avatar: String,
    #[serde(default, alias = "subHeading")]
    pub sub_heading: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub runs: Option<u64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl StoreAgent {
    pub fn path(&self) -> String {
        agent_path(&self.creator, &self.slug)
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite())
    }
}
