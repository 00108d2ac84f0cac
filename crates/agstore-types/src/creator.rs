use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "avatarSrc")]
    pub avatar_url: String,
    #[serde(default, alias = "numAgents")]
    pub num_agents: u32,
}
