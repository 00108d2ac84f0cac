use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use agstore_runtime::{CATALOG_FILE, CONFIG_FILE, resolve_workspace_path};
use anyhow::Result;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.catalog);

    let Some(command) = cli.command else {
        show_guidance(ctx.data_dir());
        return Ok(());
    };

    // The browser owns the terminal; its logs go to the configured file or nowhere
    if matches!(command, Commands::Browse) {
        match &ctx.config()?.logging.file {
            Some(path) => logging::init(cli.log_level, LogTarget::File(path))?,
            None => logging::init(cli.log_level, LogTarget::Discard)?,
        }
    } else {
        logging::init(cli.log_level, LogTarget::Stderr)?;
    }

    tracing::debug!(data_dir = %ctx.data_dir().display(), "workspace resolved");

    match command {
        Commands::Init { force } => handlers::init::handle(&ctx, force, cli.format),
        Commands::Featured { start } => handlers::featured::handle(&ctx, start, cli.format),
        Commands::Agents { limit } => handlers::agents::handle(&ctx, limit, cli.format),
        Commands::Creators => handlers::creators::handle(&ctx, cli.format),
        Commands::Route { slug } => handlers::route::handle(&ctx, &slug, cli.format),
        Commands::Browse => handlers::browse::handle(&ctx),
    }
}

fn show_guidance(data_dir: &Path) {
    let initialized = data_dir.join(CONFIG_FILE).exists() && data_dir.join(CATALOG_FILE).exists();

    println!("agstore - Agent marketplace storefront\n");

    if !initialized {
        println!("Get started:");
        println!("  agstore init\n");
        println!("The init command will:");
        println!("  1. Write a default config.toml");
        println!("  2. Write a sample catalog.json\n");
    } else {
        println!("Quick commands:");
        println!("  agstore browse                    # Open the storefront");
        println!("  agstore featured                  # List featured agents");
        println!("  agstore agents --limit 10         # Top agents");
        println!("  agstore route <SLUG>              # Print an agent's detail route\n");
    }

    println!("For more commands:");
    println!("  agstore --help");
}
