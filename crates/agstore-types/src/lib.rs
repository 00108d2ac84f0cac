pub mod agent;
pub mod catalog;
pub mod creator;
pub mod route;

pub use agent::{FeaturedAgent, StoreAgent};
pub use catalog::Catalog;
pub use creator::Creator;
pub use route::{AGENT_ROUTE_PREFIX, agent_path};
