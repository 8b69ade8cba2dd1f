// SPDX-License-Identifier: MPL-2.0
//! Directional input resolution.
//!
//! Keys, swipes, indicator clicks and the previous/next controls all boil
//! down to a [`NavigationRequest`]. Whether the request is honoured is the
//! carousel's decision, not the input layer's.

use super::SwipeThreshold;

/// A navigation intent, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    Next,
    Previous,
    /// Jump to a one-based slide. Range is checked by the carousel.
    GoTo(usize),
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl NavigationKey {
    /// Maps the key onto a request for a deck of `total` slides.
    #[must_use]
    pub fn request(self, total: usize) -> NavigationRequest {
        match self {
            NavigationKey::ArrowLeft => NavigationRequest::Previous,
            NavigationKey::ArrowRight => NavigationRequest::Next,
            NavigationKey::Home => NavigationRequest::GoTo(1),
            NavigationKey::End => NavigationRequest::GoTo(total),
        }
    }
}

/// Turns a press/release pair into a swipe.
///
/// Travel is measured as `start_x - end_x`: moving the pointer left goes to
/// the next slide, moving it right goes to the previous one. Travel must be
/// strictly greater than the threshold.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Whether a press is waiting for its release.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture and returns the request it resolves to, if any.
    pub fn release(&mut self, x: f32) -> Option<NavigationRequest> {
        let start_x = self.start_x.take()?;
        let travel = start_x - x;
        let threshold = self.threshold.as_f32();

        if travel > threshold {
            Some(NavigationRequest::Next)
        } else if travel < -threshold {
            Some(NavigationRequest::Previous)
        } else {
            None
        }
    }

    /// Drops an unfinished gesture (pointer left the window, finger lost).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
