use anyhow::Result;

use super::console_renderer;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_creators;
use crate::presentation::{CommandResultViewModel, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let catalog = ctx.catalog()?;
    let view_model = present_creators(&catalog.creators);
    console_renderer(ctx, format)?.render(CommandResultViewModel::new(view_model))
}
