// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a recording display surface.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::carousel::{DisplaySurface, SlideAnimation, SlideNumber, SurfaceInventory, TrackOffset};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    Offset(TrackOffset),
    Slide(usize, bool),
    Indicator(usize, bool),
    Progress(f32),
    Play(usize, SlideAnimation),
    ResetAnimation(usize),
}

/// Display surface that remembers every call, for asserting on carousel output.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    inventory: SurfaceInventory,
    calls: Vec<SurfaceCall>,
    offset: TrackOffset,
    progress: f32,
    active_slides: Vec<usize>,
    active_indicators: Vec<usize>,
    played: Vec<(usize, SlideAnimation)>,
}

impl RecordingSurface {
    pub fn complete(total: usize) -> Self {
        Self::with_inventory(SurfaceInventory::complete(total))
    }

    pub fn with_inventory(inventory: SurfaceInventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn offset(&self) -> TrackOffset {
        self.offset
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// The active slide, if exactly one is active.
    pub fn active_slide(&self) -> Option<usize> {
        single(&self.active_slides)
    }

    /// The active indicator, if exactly one is active.
    pub fn active_indicator(&self) -> Option<usize> {
        single(&self.active_indicators)
    }

    pub fn played(&self) -> Vec<(usize, SlideAnimation)> {
        self.played.clone()
    }
}

fn single(values: &[usize]) -> Option<usize> {
    match values {
        [only] => Some(*only),
        _ => None,
    }
}

fn toggle(set: &mut Vec<usize>, value: usize, active: bool) {
    set.retain(|v| *v != value);
    if active {
        set.push(value);
    }
}

impl DisplaySurface for RecordingSurface {
    fn inventory(&self) -> SurfaceInventory {
        self.inventory
    }

    fn set_track_offset(&mut self, offset: TrackOffset) {
        self.offset = offset;
        self.calls.push(SurfaceCall::Offset(offset));
    }

    fn set_slide_active(&mut self, slide: SlideNumber, active: bool) {
        toggle(&mut self.active_slides, slide.get(), active);
        self.calls.push(SurfaceCall::Slide(slide.get(), active));
    }

    fn set_indicator_active(&mut self, slide: SlideNumber, active: bool) {
        toggle(&mut self.active_indicators, slide.get(), active);
        self.calls.push(SurfaceCall::Indicator(slide.get(), active));
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress = percent;
        self.calls.push(SurfaceCall::Progress(percent));
    }

    fn play_animation(&mut self, slide: SlideNumber, animation: SlideAnimation) {
        self.played.push((slide.get(), animation));
        self.calls.push(SurfaceCall::Play(slide.get(), animation));
    }

    fn reset_animation(&mut self, slide: SlideNumber) {
        self.calls.push(SurfaceCall::ResetAnimation(slide.get()));
    }
}
