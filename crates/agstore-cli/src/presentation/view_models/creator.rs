use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreatorListViewModel {
    pub creators: Vec<CreatorViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorViewModel {
    pub name: String,
    pub username: String,
    pub description: String,
    pub avatar_url: String,
    pub num_agents: u32,
}
