use anyhow::Result;
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;
use crate::presentation::presenters::present_store_screen;

/// Run the interactive storefront, then print the last visited route.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    let config = ctx.config()?;

    let screen = present_store_screen(catalog);
    let renderer = TuiRenderer::new(
        screen,
        ctx.locale()?,
        config.carousel.transition(),
        config.carousel.visible_cards,
    );

    let history = renderer.run()?;
    info!(visited = history.len(), "storefront closed");

    if let Some(route) = history.current() {
        println!("{}", route);
    }
    Ok(())
}
