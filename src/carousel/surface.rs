// SPDX-License-Identifier: MPL-2.0
//! Display surface seam.
//!
//! The carousel never draws anything itself. It pushes visual state into a
//! [`DisplaySurface`]: one offset write for the slide track, active flags for
//! slides and indicators, a progress fraction, and post-transition animations.

use super::{SlideAnimation, SlideNumber, Surface};

/// Minimum number of slides a carousel needs.
pub const MIN_SLIDES: usize = 2;

/// Horizontal offset of the slide track, in percent of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackOffset(f32);

impl TrackOffset {
    /// Offset that brings `slide` into view: `-(n - 1) * 100%`.
    #[must_use]
    pub fn for_slide(slide: SlideNumber) -> Self {
        Self(-(slide.position() as f32) * 100.0)
    }

    #[must_use]
    pub fn percent(self) -> f32 {
        self.0
    }

    /// Scroll distance in pixels for a viewport of `viewport_width`.
    ///
    /// The offset is negative (content moves left), the returned scroll
    /// distance is positive.
    #[must_use]
    pub fn to_scroll_x(self, viewport_width: f32) -> f32 {
        -self.0 / 100.0 * viewport_width.max(0.0)
    }
}

/// What a display surface actually provides, checked once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceInventory {
    pub track: bool,
    pub slides: usize,
    pub indicators: usize,
    pub progress: bool,
    pub previous_control: bool,
    pub next_control: bool,
}

impl SurfaceInventory {
    /// An inventory with every surface present for `total` slides.
    #[must_use]
    pub fn complete(total: usize) -> Self {
        Self {
            track: true,
            slides: total,
            indicators: total,
            progress: true,
            previous_control: true,
            next_control: true,
        }
    }

    /// Returns the first required surface that is absent for `total` slides.
    ///
    /// Fewer than [`MIN_SLIDES`] slides reports the first missing slide.
    #[must_use]
    pub fn first_missing(&self, total: usize) -> Option<Surface> {
        let required = total.max(MIN_SLIDES);
        if !self.track {
            return Some(Surface::Track);
        }
        if self.slides < required || total < MIN_SLIDES {
            return Some(Surface::Slide(self.slides.min(total) + 1));
        }
        if self.indicators < required {
            return Some(Surface::Indicator(self.indicators + 1));
        }
        if !self.progress {
            return Some(Surface::Progress);
        }
        if !self.previous_control {
            return Some(Surface::PreviousControl);
        }
        if !self.next_control {
            return Some(Surface::NextControl);
        }
        None
    }
}

/// The visual collaborator driven by the carousel.
pub trait DisplaySurface {
    /// Reports which surfaces exist.
    fn inventory(&self) -> SurfaceInventory;

    /// Moves the slide track. Called exactly once per transition and once per resize.
    fn set_track_offset(&mut self, offset: TrackOffset);

    fn set_slide_active(&mut self, slide: SlideNumber, active: bool);

    fn set_indicator_active(&mut self, slide: SlideNumber, active: bool);

    /// Sets the progress fill, in percent (`0.0..=100.0`).
    fn set_progress(&mut self, percent: f32);

    /// Plays `animation` on a slide that has just arrived.
    fn play_animation(&mut self, slide: SlideNumber, animation: SlideAnimation);

    /// Puts a slide's animation back to its initial state after leaving it.
    fn reset_animation(&mut self, _slide: SlideNumber) {}
}
