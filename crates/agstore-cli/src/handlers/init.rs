use agstore_runtime::{FileStatus, InitService};
use anyhow::Result;

use super::console_renderer;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_init_result;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, force: bool, format: OutputFormat) -> Result<()> {
    let result = InitService::run(ctx.data_dir(), force)?;
    let unchanged = result.config_status == FileStatus::KeptExisting
        && result.catalog_status == FileStatus::KeptExisting;

    let mut view = CommandResultViewModel::new(present_init_result(result));
    if unchanged {
        view = view
            .with_badge(StatusBadge::warning("Workspace already initialized"))
            .with_suggestion(
                Guidance::new("Restore the sample catalog").with_command("agstore init --force"),
            );
    } else {
        view = view
            .with_badge(StatusBadge::success("Workspace ready"))
            .with_suggestion(
                Guidance::new("List featured agents").with_command("agstore featured"),
            )
            .with_suggestion(Guidance::new("Open the storefront").with_command("agstore browse"));
    }

    console_renderer(ctx, format)?.render(view)
}
