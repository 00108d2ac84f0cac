pub mod agent_table;
pub mod featured_section;
pub mod store_page;

pub use agent_table::{AgentTableAction, AgentTableComponent};
pub use featured_section::{FeaturedAction, FeaturedSectionComponent};
pub use store_page::{Focus, StoreAction, StorePageComponent};
