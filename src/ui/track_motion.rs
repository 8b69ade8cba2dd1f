// SPDX-License-Identifier: MPL-2.0
//! Linear scroll of the slide track while a transition is in flight.
//!
//! The carousel writes the final offset the moment a transition starts. The
//! app keeps a [`TrackMotion`] from the position the track was showing to
//! that offset and, on every frame tick, scrolls the track to
//! [`TrackMotion::position_at`]. The motion spans the transition delay, so
//! the input lock covers exactly the visible movement.

use std::time::{Duration, Instant};

/// Tick interval while a motion is running (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Scroll positions closer than this are considered equal.
pub const SCROLL_TOLERANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMotion {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl TrackMotion {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Final scroll position.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Fraction of the motion completed at `now`, `0.0..=1.0`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Scroll position at `now`, moving at constant speed.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress_at(now)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

/// Whether a reported track position has drifted from where it should be.
#[must_use]
pub fn has_drifted(shown: f32, expected: f32) -> bool {
    (shown - expected).abs() > SCROLL_TOLERANCE
}
