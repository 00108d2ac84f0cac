//! Tracing subscriber setup.
//!
//! Console commands log to stderr. The interactive browser owns the terminal,
//! so it logs to a file when one is configured and discards output otherwise.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: LogLevel, target: LogTarget<'_>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already set: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_target_creates_log_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("agstore.log");

        init(LogLevel::Info, LogTarget::File(&path))?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let path = Path::new("/definitely/not/a/dir/agstore.log");
        let err = init(LogLevel::Info, LogTarget::File(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
