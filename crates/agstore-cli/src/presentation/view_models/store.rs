//! Read-only snapshot of the interactive storefront page.
//!
//! Slide index and table selection are UI state and live in the components,
//! never here.

use super::{AgentRowViewModel, CreatorViewModel, FeaturedSlideViewModel};

#[derive(Debug, Clone)]
pub struct StoreScreenViewModel {
    pub hero: HeroViewModel,
    pub featured: Vec<FeaturedSlideViewModel>,
    pub agents: Vec<AgentRowViewModel>,
    pub creators: Vec<CreatorViewModel>,
}

#[derive(Debug, Clone)]
pub struct HeroViewModel {
    pub title: String,
    pub subtitle: String,
    pub search_placeholder: String,
    pub agent_count: usize,
    pub creator_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarViewModel {
    pub current_route: Option<String>,
    pub message: Option<String>,
    pub focus_label: &'static str,
}
