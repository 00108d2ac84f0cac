use agstore_core::SlideController;
use anyhow::Result;
use tracing::debug;

use super::console_renderer;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_featured;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, start: Option<usize>, format: OutputFormat) -> Result<()> {
    let catalog = ctx.catalog()?;

    let mut controller = SlideController::new(catalog.featured.len());
    if let Some(index) = start {
        controller.select(index)?;
    }
    debug!(current = ?controller.current(), "featured slides");

    let view_model = present_featured(&catalog.featured, controller.current());
    let mut result = CommandResultViewModel::new(view_model);
    if catalog.featured.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Restore the sample catalog").with_command("agstore init --force"),
        );
    }

    console_renderer(ctx, format)?.render(result)
}
