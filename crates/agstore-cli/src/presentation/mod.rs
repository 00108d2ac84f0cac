//! # Presentation Layer
//!
//! User interface logic for the CLI, organized as MVVM with stateful
//! components for the interactive storefront.
//!
//! ## Data Flow
//!
//! ### Console output (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! ### Interactive TUI (`agstore browse`)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ StoreScreenViewModel ] --> [ TuiRenderer (Router) ]
//!                                                                         |
//!                                                       [ StorePageComponent ] <-- keys, mouse
//!                                                         |               |
//!                                         [ FeaturedSectionComponent ] [ AgentTableComponent ]
//!                                                (Carousel + viewport)     (TableState)
//!                                                         |               |
//!                                                        [ Views (Widgets) ]
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** `runs: Option<u64>`, not `"75,000"`.
//!    JSON output is an API; grouping and the `—` placeholder happen in views.
//! 2. **UI state lives in components.** The slide index and table selection
//!    are private component state, never view model fields.
//! 3. **Index safety.** Components re-check their indices against the data
//!    before rendering (the carousel resizes, the table clamps).
//! 4. **Action boundaries.** Slide moves and focus changes stay inside a
//!    component; opening a listing goes up as an action and the renderer
//!    pushes the route into the navigation sink.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Convert catalog records | `presenters/` |
//! | Change plain text layout or colors | `views/` |
//! | Change a TUI widget | `views/tui/` |
//! | Handle a key or click | `views/tui/components/` |
//! | Format runs or ratings | `formatters/` |
//! | Change output drivers or the event loop | `renderers/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
};
