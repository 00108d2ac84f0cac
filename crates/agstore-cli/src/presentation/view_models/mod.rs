pub mod common;
pub mod creator;
pub mod featured;
pub mod init;
pub mod listing;
pub mod result;
pub mod route;
pub mod store;

use std::fmt;

pub use common::{DisplayOptions, Guidance, StatusBadge, StatusLevel};
pub use creator::{CreatorListViewModel, CreatorViewModel};
pub use featured::{FeaturedListViewModel, FeaturedSlideViewModel};
pub use init::{InitFileStatus, InitResultViewModel};
pub use listing::{AgentRowViewModel, AgentTableViewModel};
pub use result::CommandResultViewModel;
pub use route::RouteViewModel;
pub use store::{HeroViewModel, StatusBarViewModel, StoreScreenViewModel};

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
