// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Slide transition duration bounds
//! - **Swipe**: Minimum horizontal travel for swipe gestures
//! - **Window**: Default and minimum window size

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default duration of a slide transition (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Minimum transition duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 100;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default minimum horizontal travel for a swipe (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD: u32 = 50;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD: u32 = 10;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD: u32 = 400;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD > 0);
    assert!(MAX_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    // Window validation
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
