// SPDX-License-Identifier: MPL-2.0
//! User interface: the carousel screen and its visual state.
//!
//! - [`surface_model`] - Retained state the carousel paints into
//! - [`carousel_view`] - Slide track, controls, indicators and progress
//! - [`track_motion`] - Frame-by-frame scroll of the track during a transition
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel_view;
pub mod design_tokens;
pub mod styles;
pub mod surface_model;
pub mod theming;
pub mod track_motion;
