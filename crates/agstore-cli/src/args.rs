use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agstore")]
#[command(about = "Browse agent marketplace listings from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Workspace directory (defaults to AGSTORE_PATH or the XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Catalog JSON file (overrides the configured catalog)")]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config and a sample catalog
    Init {
        #[arg(long, help = "Overwrite existing files")]
        force: bool,
    },

    /// List featured agents in carousel order
    Featured {
        #[arg(long, help = "Slide to mark as current")]
        start: Option<usize>,
    },

    /// Show the top agents table
    Agents {
        #[arg(long, help = "Show at most this many agents (at least 1)")]
        limit: Option<NonZeroUsize>,
    },

    /// List featured creators
    Creators,

    /// Print the detail route for an agent slug
    Route { slug: String },

    /// Open the interactive storefront
    Browse,
}
