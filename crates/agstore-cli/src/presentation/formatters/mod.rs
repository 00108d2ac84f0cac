pub mod number;
pub mod rating;
pub mod text;

/// Shown in place of a missing metric.
pub const PLACEHOLDER: &str = "—";

pub use number::format_runs;
pub use rating::{STAR, format_rating, rating_label};
pub use text::truncate;
