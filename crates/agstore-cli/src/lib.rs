// NOTE: agstore layering
//
// - agstore-types: listing records and the detail route template
// - agstore-core: carousel index, viewport animation, navigation sinks
// - agstore-runtime: config, catalog files, workspace init
// - agstore (this crate): CLI surface and the MVVM presentation layer
//
// The interactive browser keeps UI state (slide index, table selection) in
// components; view models stay read-only snapshots of the catalog.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
