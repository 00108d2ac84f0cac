//! Animated viewport position.
//!
//! The viewport tracks a fractional start position that eases toward the
//! latest requested index. A new request always starts from whatever is on
//! screen at that moment, so a transition in flight is re-targeted instead of
//! finished first.

use std::time::{Duration, Instant};

use crate::carousel::{SyncRequest, Viewport};

#[derive(Debug, Clone)]
pub struct AnimatedViewport {
    from: f64,
    target: usize,
    started_at: Option<Instant>,
    duration: Duration,
}

impl AnimatedViewport {
    pub fn new() -> Self {
        Self {
            from: 0.0,
            target: 0,
            started_at: None,
            duration: Duration::ZERO,
        }
    }

    /// Index the viewport is moving toward (or resting at).
    pub fn target(&self) -> usize {
        self.target
    }

    /// Apply a sync request as of `now`.
    pub fn retarget(&mut self, request: SyncRequest, now: Instant) {
        let displayed = self.position_at(now);

        if request.animated && !request.duration.is_zero() {
            self.from = displayed;
            self.started_at = Some(now);
            self.duration = request.duration;
        } else {
            self.from = request.start_index as f64;
            self.started_at = None;
            self.duration = Duration::ZERO;
        }
        self.target = request.start_index;
    }

    /// Fraction of the current transition completed, in `[0, 1]`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Fractional start position as displayed at `now`.
    pub fn position_at(&self, now: Instant) -> f64 {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.target as f64;
        }
        let eased = ease_out_cubic(progress);
        self.from + (self.target as f64 - self.from) * eased
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress_at(now) < 1.0
    }
}

impl Default for AnimatedViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for AnimatedViewport {
    fn sync(&mut self, request: SyncRequest) {
        self.retarget(request, Instant::now());
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
