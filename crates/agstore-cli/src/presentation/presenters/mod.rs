//! Pure conversions from catalog records into view models.

pub mod catalog;
pub mod init;
pub mod store;

pub use catalog::{present_agents, present_creators, present_featured, present_route};
pub use init::present_init_result;
pub use store::present_store_screen;
