//! Testing infrastructure for agstore integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: catalogs built from the sample data
//! - `assertions`: checks on `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
