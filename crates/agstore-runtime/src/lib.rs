pub mod catalog;
pub mod config;
pub mod error;
pub mod init;

pub use catalog::{load_catalog, sample_catalog, save_catalog};
pub use config::{
    CATALOG_FILE, CONFIG_FILE, CarouselConfig, CatalogConfig, Config, DisplayConfig, LoggingConfig,
    resolve_workspace_path,
};
pub use error::{Error, Result};
pub use init::{FileStatus, InitResult, InitService};
