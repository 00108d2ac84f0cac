use agstore_runtime::Config;
use agstore_types::Catalog;
use anyhow::Result;
use num_format::Locale;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::presentation::formatters::number::parse_locale;

/// Lazily loaded workspace state shared by handlers.
pub struct ExecutionContext {
    data_dir: PathBuf,
    catalog_override: Option<PathBuf>,
    config: OnceCell<Config>,
    catalog: OnceCell<Catalog>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, catalog_override: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            catalog_override,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&Config::path_in(&self.data_dir))?))
    }

    pub fn catalog_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.catalog_override {
            return Ok(path.clone());
        }
        Ok(self.config()?.catalog_path(&self.data_dir))
    }

    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalog.get_or_try_init(|| {
            let path = self.catalog_path()?;
            Ok(agstore_runtime::load_catalog(&path)?)
        })
    }

    pub fn locale(&self) -> Result<Locale> {
        parse_locale(&self.config()?.display.locale)
    }
}
