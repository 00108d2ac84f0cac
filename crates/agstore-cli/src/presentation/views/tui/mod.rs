//! TUI View Components and Stateful Components
//!
//! 1. **Views**: stateless Ratatui widgets that map view models to cells
//! 2. **Components**: own UI state (slide index, table selection), handle
//!    input, clamp indices against the data and delegate drawing to views

pub mod agent_table;
pub mod components;
pub mod creators_strip;
pub mod featured_card;
pub mod featured_strip;
pub mod hero;
pub mod indicator_strip;
pub mod status_bar;

pub use agent_table::AgentTableView;
pub use components::{
    AgentTableAction, AgentTableComponent, FeaturedAction, FeaturedSectionComponent, Focus,
    StoreAction, StorePageComponent,
};
pub use creators_strip::CreatorsStripView;
pub use featured_card::FeaturedCardView;
pub use featured_strip::FeaturedStripView;
pub use hero::HeroView;
pub use indicator_strip::IndicatorStripView;
pub use status_bar::StatusBarView;

use ratatui::style::{Color, Modifier, Style};

pub(crate) fn section_border(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
