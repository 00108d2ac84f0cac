use anyhow::{Context, Result};
use num_format::{Locale, ToFormattedString};

use super::PLACEHOLDER;

pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::from_name(name).with_context(|| format!("Unknown display locale '{}'", name))
}

/// Run count with the locale's thousands separator, or a dash when unknown.
pub fn format_runs(runs: Option<u64>, locale: &Locale) -> String {
    match runs {
        Some(n) => n.to_formatted_string(locale),
        None => PLACEHOLDER.to_string(),
    }
}
