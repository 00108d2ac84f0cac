use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AgentTableViewModel {
    pub agents: Vec<AgentRowViewModel>,
    /// Rows in the catalog before any limit was applied.
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRowViewModel {
    pub rank: usize,
    pub slug: String,
    pub agent_name: String,
    pub creator: String,
    pub description: String,
    pub runs: Option<u64>,
    pub rating: Option<f64>,
    pub path: String,
}
