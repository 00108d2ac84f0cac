use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitFileStatus {
    Created,
    Overwritten,
    KeptExisting,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_status: InitFileStatus,
    pub catalog_path: String,
    pub catalog_status: InitFileStatus,
    pub featured_count: usize,
    pub agent_count: usize,
    pub creator_count: usize,
}
