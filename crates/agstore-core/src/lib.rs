//! Stateful pieces of the storefront that are independent of any terminal.
//!
//! - [`carousel`]: circular slide index plus viewport synchronization
//! - [`viewport`]: animated start position that follows sync requests
//! - [`indicator`]: position marks derived from the slide index
//! - [`navigation`]: where selected listings are sent

pub mod carousel;
pub mod error;
pub mod indicator;
pub mod navigation;
pub mod viewport;

pub use carousel::{Carousel, SlideController, SyncRequest, TRANSITION_DURATION, Viewport};
pub use error::{CarouselError, Result};
pub use indicator::{IndicatorMark, indicator_marks};
pub use navigation::{History, NavigationEntry, NavigationSink};
pub use viewport::AnimatedViewport;
