use anyhow::Result;

use super::console_renderer;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_route;
use crate::presentation::{CommandResultViewModel, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, slug: &str, format: OutputFormat) -> Result<()> {
    let catalog = ctx.catalog()?;

    let Some(path) = catalog.route_for(slug) else {
        anyhow::bail!(
            "No agent with slug '{}' in {}",
            slug,
            ctx.catalog_path()?.display()
        );
    };

    console_renderer(ctx, format)?.render(CommandResultViewModel::new(present_route(slug, path)))
}
