//! Catalog fixtures.
//!
//! Non-empty fixtures derive from `sample_catalog()` so tests stay in sync
//! with what `agstore init` writes.

use agstore_runtime::{sample_catalog, save_catalog};
use agstore_types::Catalog;
use anyhow::Result;
use std::path::Path;

/// Catalog with no listings at all.
pub fn empty_catalog() -> Catalog {
    Catalog::default()
}

/// Sample catalog truncated to its first `count` featured agents.
pub fn catalog_with_featured(count: usize) -> Catalog {
    let mut catalog = sample_catalog();
    catalog.featured.truncate(count);
    catalog
}

pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    save_catalog(catalog, path)?;
    Ok(())
}
