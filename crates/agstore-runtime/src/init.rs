use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{load_catalog, sample_catalog, save_catalog};
use crate::config::Config;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Created,
    Overwritten,
    KeptExisting,
}

#[derive(Debug, Clone)]
pub struct InitResult {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_status: FileStatus,
    pub catalog_path: PathBuf,
    pub catalog_status: FileStatus,
    pub featured_count: usize,
    pub agent_count: usize,
    pub creator_count: usize,
}

pub struct InitService;

impl InitService {
    /// Write a default config and the sample catalog into `data_dir`.
    ///
    /// Existing files are kept unless `force` is set.
    pub fn run(data_dir: &Path, force: bool) -> Result<InitResult> {
        std::fs::create_dir_all(data_dir)?;

        let config_path = Config::path_in(data_dir);
        let config_status = Self::write_config(&config_path, force)?;

        let config = Config::load_from(&config_path)?;
        let catalog_path = config.catalog_path(data_dir);
        let catalog_status = Self::write_catalog(&catalog_path, force)?;

        let catalog = load_catalog(&catalog_path)?;
        info!(
            data_dir = %data_dir.display(),
            featured = catalog.featured.len(),
            "workspace initialized"
        );

        Ok(InitResult {
            data_dir: data_dir.to_path_buf(),
            config_path,
            config_status,
            catalog_path,
            catalog_status,
            featured_count: catalog.featured.len(),
            agent_count: catalog.agents.len(),
            creator_count: catalog.creators.len(),
        })
    }

    fn write_config(path: &Path, force: bool) -> Result<FileStatus> {
        let status = Self::status_for(path, force);
        if status != FileStatus::KeptExisting {
            Config::default().save_to(path)?;
        }
        Ok(status)
    }

    fn write_catalog(path: &Path, force: bool) -> Result<FileStatus> {
        let status = Self::status_for(path, force);
        if status != FileStatus::KeptExisting {
            save_catalog(&sample_catalog(), path)?;
        }
        Ok(status)
    }

    fn status_for(path: &Path, force: bool) -> FileStatus {
        match (path.exists(), force) {
            (false, _) => FileStatus::Created,
            (true, true) => FileStatus::Overwritten,
            (true, false) => FileStatus::KeptExisting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_files() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join(".agstore");

        let result = InitService::run(&data_dir, false)?;
        assert_eq!(result.config_status, FileStatus::Created);
        assert_eq!(result.catalog_status, FileStatus::Created);
        assert!(result.config_path.exists());
        assert!(result.catalog_path.exists());
        assert_eq!(result.featured_count, sample_catalog().featured.len());

        Ok(())
    }

    #[test]
    fn test_init_keeps_existing_catalog() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path();
        let catalog_path = data_dir.join("catalog.json");
        std::fs::write(&catalog_path, r#"{"featured": []}"#)?;

        let result = InitService::run(data_dir, false)?;
        assert_eq!(result.catalog_status, FileStatus::KeptExisting);
        assert_eq!(result.featured_count, 0);

        let forced = InitService::run(data_dir, true)?;
        assert_eq!(forced.catalog_status, FileStatus::Overwritten);
        assert_eq!(forced.config_status, FileStatus::Overwritten);
        assert!(forced.featured_count > 0);

        Ok(())
    }
}
