// SPDX-License-Identifier: MPL-2.0
//! Retained visual state the carousel paints into.
//!
//! Iced redraws from state on every frame, so the carousel's surface writes
//! land in this model and the view reads them back. The track offset is the
//! one write that also needs a widget operation: it is kept as a pending
//! scroll until the update loop turns it into a `scroll_to` task.

use crate::carousel::{
    DisplaySurface, SlideAnimation, SlideNumber, SurfaceInventory, TrackOffset,
};
use crate::config::WINDOW_DEFAULT_WIDTH;

/// Widget id of the horizontal slide track.
pub const TRACK_ID: &str = "slide-track";

/// Per-slide flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideVisual {
    pub active: bool,
    /// Animation that has played since the slide arrived.
    pub played: Option<SlideAnimation>,
}

#[derive(Debug, Clone)]
pub struct SurfaceModel {
    slides: Vec<SlideVisual>,
    indicators: Vec<bool>,
    offset: TrackOffset,
    progress: f32,
    viewport_width: f32,
    pending_scroll: bool,
}

impl SurfaceModel {
    /// A model with one slide panel and one indicator per slide.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            slides: vec![SlideVisual::default(); total],
            indicators: vec![false; total],
            offset: TrackOffset::default(),
            progress: 0.0,
            viewport_width: WINDOW_DEFAULT_WIDTH as f32,
            pending_scroll: false,
        }
    }

    #[must_use]
    pub fn slide(&self, slide: SlideNumber) -> SlideVisual {
        self.slides
            .get(slide.position())
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_indicator_active(&self, slide: SlideNumber) -> bool {
        self.indicators
            .get(slide.position())
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn offset(&self) -> TrackOffset {
        self.offset
    }

    /// Progress in percent, `0.0..=100.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Records the width slides are laid out at. The scroll position is
    /// only refreshed by the next offset write.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
    }

    /// Pixel scroll position for the current offset and width.
    #[must_use]
    pub fn scroll_x(&self) -> f32 {
        self.offset.to_scroll_x(self.viewport_width)
    }

    /// Returns the scroll position once per offset write.
    pub fn take_scroll_x(&mut self) -> Option<f32> {
        if std::mem::take(&mut self.pending_scroll) {
            Some(self.scroll_x())
        } else {
            None
        }
    }
}

impl DisplaySurface for SurfaceModel {
    fn inventory(&self) -> SurfaceInventory {
        SurfaceInventory {
            track: true,
            slides: self.slides.len(),
            indicators: self.indicators.len(),
            progress: true,
            previous_control: true,
            next_control: true,
        }
    }

    fn set_track_offset(&mut self, offset: TrackOffset) {
        self.offset = offset;
        self.pending_scroll = true;
    }

    fn set_slide_active(&mut self, slide: SlideNumber, active: bool) {
        if let Some(visual) = self.slides.get_mut(slide.position()) {
            visual.active = active;
        }
    }

    fn set_indicator_active(&mut self, slide: SlideNumber, active: bool) {
        if let Some(flag) = self.indicators.get_mut(slide.position()) {
            *flag = active;
        }
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress = percent.clamp(0.0, 100.0);
    }

    fn play_animation(&mut self, slide: SlideNumber, animation: SlideAnimation) {
        if let Some(visual) = self.slides.get_mut(slide.position()) {
            visual.played = Some(animation);
        }
    }

    fn reset_animation(&mut self, slide: SlideNumber) {
        if let Some(visual) = self.slides.get_mut(slide.position()) {
            visual.played = None;
        }
    }
}
