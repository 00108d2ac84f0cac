//! Text views (`fmt::Display`) for console output and Ratatui widgets under `tui`.

pub mod creators;
pub mod featured;
pub mod init;
pub mod listing;
pub mod route;
pub mod tui;

pub use featured::indicator_line;
