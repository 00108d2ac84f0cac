pub mod agents;
pub mod browse;
pub mod creators;
pub mod featured;
pub mod init;
pub mod route;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::{ConsoleRenderer, DisplayOptions};
use crate::types::OutputFormat;

/// Console renderer for `format`, colored only when stdout is a terminal.
fn console_renderer(ctx: &ExecutionContext, format: OutputFormat) -> Result<ConsoleRenderer> {
    let options = DisplayOptions {
        enable_color: format == OutputFormat::Plain && std::io::stdout().is_terminal(),
        locale: ctx.locale()?,
    };
    Ok(ConsoleRenderer::new(format == OutputFormat::Json, options))
}
