use std::num::NonZeroUsize;

use anyhow::Result;

use super::console_renderer;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_agents;
use crate::presentation::{CommandResultViewModel, Renderer};
use crate::types::OutputFormat;

pub fn handle(
    ctx: &ExecutionContext,
    limit: Option<NonZeroUsize>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let view_model = present_agents(&catalog.agents, limit.map(NonZeroUsize::get));
    console_renderer(ctx, format)?.render(CommandResultViewModel::new(view_model))
}
