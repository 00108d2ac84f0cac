use agstore_runtime::{FileStatus, InitResult};

use crate::presentation::view_models::{InitFileStatus, InitResultViewModel};

pub fn present_init_result(result: InitResult) -> InitResultViewModel {
    InitResultViewModel {
        data_dir: result.data_dir.display().to_string(),
        config_path: result.config_path.display().to_string(),
        config_status: present_status(result.config_status),
        catalog_path: result.catalog_path.display().to_string(),
        catalog_status: present_status(result.catalog_status),
        featured_count: result.featured_count,
        agent_count: result.agent_count,
        creator_count: result.creator_count,
    }
}

fn present_status(status: FileStatus) -> InitFileStatus {
    match status {
        FileStatus::Created => InitFileStatus::Created,
        FileStatus::Overwritten => InitFileStatus::Overwritten,
        FileStatus::KeptExisting => InitFileStatus::KeptExisting,
    }
}
