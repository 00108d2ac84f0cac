//! Circular slide index over a fixed collection.
//!
//! [`SlideController`] holds the index arithmetic. [`Carousel`] pairs it with a
//! [`Viewport`] and forwards every index change as a [`SyncRequest`], so the
//! rendered strip always converges on the latest index.

use std::time::Duration;

use tracing::debug;

use crate::error::{CarouselError, Result};

/// Transition used when the viewport follows an index change.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Instruction for a viewport to move its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncRequest {
    pub start_index: usize,
    pub duration: Duration,
    /// `false` means jump without animating.
    pub animated: bool,
}

/// Anything that renders a window over the slides and can be re-targeted.
pub trait Viewport {
    fn sync(&mut self, request: SyncRequest);
}

/// Wrap-around index over `len` slides.
///
/// The index is only meaningful while `len > 0`; an empty controller is inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideController {
    len: usize,
    index: usize,
}

impl SlideController {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, or `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Move to the next slide, wrapping to the first. No-op when empty.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Move to the previous slide, wrapping to the last. No-op when empty.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Jump directly to `index`. Out-of-range indices leave the state untouched.
    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }

    /// Replace the collection length, clamping the index into the new range.
    pub fn resize(&mut self, len: usize) -> Option<usize> {
        self.len = len;
        self.index = match len {
            0 => 0,
            _ => self.index.min(len - 1),
        };
        self.current()
    }
}

/// A [`SlideController`] wired to the viewport that displays it.
#[derive(Debug)]
pub struct Carousel<V: Viewport> {
    controller: SlideController,
    viewport: V,
    transition: Duration,
}

impl<V: Viewport> Carousel<V> {
    pub fn new(len: usize, viewport: V) -> Self {
        Self {
            controller: SlideController::new(len),
            viewport,
            transition: TRANSITION_DURATION,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn current(&self) -> Option<usize> {
        self.controller.current()
    }

    pub fn len(&self) -> usize {
        self.controller.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controller.is_empty()
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn advance(&mut self) -> Option<usize> {
        let index = self.controller.advance()?;
        debug!(index, len = self.len(), "carousel advanced");
        self.sync(index, true);
        Some(index)
    }

    pub fn retreat(&mut self) -> Option<usize> {
        let index = self.controller.retreat()?;
        debug!(index, len = self.len(), "carousel retreated");
        self.sync(index, true);
        Some(index)
    }

    pub fn select(&mut self, index: usize) -> Result<usize> {
        let index = self.controller.select(index)?;
        debug!(index, len = self.len(), "carousel slide selected");
        self.sync(index, true);
        Ok(index)
    }

    /// Adopt a new collection length. The viewport jumps rather than animates.
    pub fn resize(&mut self, len: usize) -> Option<usize> {
        let index = self.controller.resize(len)?;
        self.sync(index, false);
        Some(index)
    }

    fn sync(&mut self, start_index: usize, animated: bool) {
        self.viewport.sync(SyncRequest {
            start_index,
            duration: self.transition,
            animated,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingViewport {
        requests: Vec<SyncRequest>,
    }

    impl Viewport for RecordingViewport {
        fn sync(&mut self, request: SyncRequest) {
            self.requests.push(request);
        }
    }

    fn at(len: usize, index: usize) -> SlideController {
        let mut controller = SlideController::new(len);
        controller.select(index).unwrap();
        controller
    }

    #[test]
    fn test_initial_index_is_zero() {
        assert_eq!(SlideController::new(4).current(), Some(0));
    }

    #[test]
    fn test_advance_then_retreat_is_identity() {
        for len in 1..=7 {
            for start in 0..len {
                let mut controller = at(len, start);
                controller.advance();
                controller.retreat();
                assert_eq!(controller.current(), Some(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_advancing_len_times_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut controller = at(len, start);
                for _ in 0..len {
                    controller.advance();
                }
                assert_eq!(controller.current(), Some(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_advance_wraps_forward() {
        let mut controller = SlideController::new(3);
        assert_eq!(controller.advance(), Some(1));
        assert_eq!(controller.advance(), Some(2));
        assert_eq!(controller.advance(), Some(0));
    }

    #[test]
    fn test_retreat_wraps_backward() {
        let mut controller = SlideController::new(3);
        assert_eq!(controller.retreat(), Some(2));
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut controller = SlideController::new(1);
        assert_eq!(controller.advance(), Some(0));
        assert_eq!(controller.retreat(), Some(0));
    }

    #[test]
    fn test_empty_controller_is_inert() {
        let mut controller = SlideController::new(0);
        assert!(controller.is_empty());
        assert_eq!(controller.advance(), None);
        assert_eq!(controller.retreat(), None);
        assert_eq!(controller.current(), None);
        assert_eq!(
            controller.select(0),
            Err(CarouselError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_select_out_of_range_keeps_index() {
        let mut controller = at(3, 1);
        assert_eq!(
            controller.select(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(controller.current(), Some(1));
    }

    #[test]
    fn test_resize_clamps_index() {
        let mut controller = at(5, 4);
        assert_eq!(controller.resize(2), Some(1));
        assert_eq!(controller.resize(0), None);
        assert_eq!(controller.resize(3), Some(0));
    }

    #[test]
    fn test_every_move_syncs_viewport_once() {
        let mut carousel = Carousel::new(3, RecordingViewport::default());
        carousel.advance();
        carousel.retreat();
        carousel.retreat();
        carousel.select(1).unwrap();

        let starts: Vec<usize> = carousel
            .viewport()
            .requests
            .iter()
            .map(|r| r.start_index)
            .collect();
        assert_eq!(starts, vec![1, 0, 2, 1]);
        assert!(carousel.viewport().requests.iter().all(|r| r.animated));
        assert!(
            carousel
                .viewport()
                .requests
                .iter()
                .all(|r| r.duration == Duration::from_millis(500))
        );
    }

    #[test]
    fn test_empty_carousel_never_syncs() {
        let mut carousel = Carousel::new(0, RecordingViewport::default());
        carousel.advance();
        carousel.retreat();
        assert!(carousel.select(0).is_err());
        assert!(carousel.resize(0).is_none());
        assert!(carousel.viewport().requests.is_empty());
    }

    #[test]
    fn test_failed_select_does_not_sync() {
        let mut carousel = Carousel::new(2, RecordingViewport::default());
        assert!(carousel.select(5).is_err());
        assert!(carousel.viewport().requests.is_empty());
    }

    #[test]
    fn test_resize_jumps_without_animation() {
        let mut carousel = Carousel::new(4, RecordingViewport::default());
        carousel.select(3).unwrap();
        carousel.resize(2);

        let last = carousel.viewport().requests.last().copied().unwrap();
        assert_eq!(last.start_index, 1);
        assert!(!last.animated);
    }

    #[test]
    fn test_custom_transition_is_forwarded() {
        let mut carousel = Carousel::new(2, RecordingViewport::default())
            .with_transition(Duration::from_millis(120));
        carousel.advance();
        assert_eq!(
            carousel.viewport().requests[0].duration,
            Duration::from_millis(120)
        );
    }
}
