// SPDX-License-Identifier: MPL-2.0
//! Tunable carousel behaviour.

use crate::config::{
    CarouselConfig, DEFAULT_SWIPE_THRESHOLD, DEFAULT_TRANSITION_MS, MAX_SWIPE_THRESHOLD,
    MAX_TRANSITION_MS, MIN_SWIPE_THRESHOLD, MIN_TRANSITION_MS,
};
use std::time::Duration;

/// Length of a slide transition in milliseconds.
///
/// # Example
///
/// ```
/// use iced_slides::carousel::TransitionDuration;
///
/// assert_eq!(TransitionDuration::default().value(), 800);
///
/// // Values outside range are clamped
/// assert_eq!(TransitionDuration::new(1).value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a duration, clamping to the supported range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

/// Minimum horizontal travel, in logical pixels, for a drag to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeThreshold(u32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the supported range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// Behaviour switches for a [`SlideCarousel`](super::SlideCarousel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub transition: TransitionDuration,
    pub swipe_threshold: SwipeThreshold,
    /// Next on the last slide goes to the first (and vice versa).
    pub wrap_around: bool,
    /// Publish the current slide to the location collaborator.
    pub publish_location: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            transition: TransitionDuration::default(),
            swipe_threshold: SwipeThreshold::default(),
            wrap_around: true,
            publish_location: true,
        }
    }
}

impl From<&CarouselConfig> for CarouselOptions {
    fn from(config: &CarouselConfig) -> Self {
        let defaults = Self::default();
        Self {
            transition: config
                .transition_ms
                .map_or(defaults.transition, TransitionDuration::new),
            swipe_threshold: config
                .swipe_threshold
                .map_or(defaults.swipe_threshold, SwipeThreshold::new),
            wrap_around: config.wrap_around.unwrap_or(defaults.wrap_around),
            publish_location: config.publish_location.unwrap_or(defaults.publish_location),
        }
    }
}
