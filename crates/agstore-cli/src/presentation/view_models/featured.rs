use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedListViewModel {
    /// Slide marked as current; `None` when there are no slides.
    pub current_index: Option<usize>,
    pub slides: Vec<FeaturedSlideViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedSlideViewModel {
    pub index: usize,
    pub slug: String,
    pub agent_name: String,
    pub agent_image: String,
    pub creator_name: String,
    pub creator_avatar: String,
    pub sub_heading: String,
    pub description: String,
    pub runs: Option<u64>,
    pub rating: Option<f64>,
    pub path: String,
}
