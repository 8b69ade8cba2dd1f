// SPDX-License-Identifier: MPL-2.0
//! Carousel failure kinds.

use std::fmt;

/// A display element the carousel needs before it can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The horizontal track that holds every slide.
    Track,
    /// The slide at the given one-based position.
    Slide(usize),
    /// The indicator for the slide at the given one-based position.
    Indicator(usize),
    /// The progress bar.
    Progress,
    /// The "previous slide" control.
    PreviousControl,
    /// The "next slide" control.
    NextControl,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Track => write!(f, "slide track"),
            Surface::Slide(n) => write!(f, "slide {}", n),
            Surface::Indicator(n) => write!(f, "indicator {}", n),
            Surface::Progress => write!(f, "progress indicator"),
            Surface::PreviousControl => write!(f, "previous control"),
            Surface::NextControl => write!(f, "next control"),
        }
    }
}

/// Errors raised by the slide carousel.
///
/// Only two things can go wrong: a required surface is absent when the
/// carousel is built, or a caller asks for a slide outside `1..=total`.
/// Repeated input and resizes during a transition are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A required display element is absent at construction.
    MissingSurface(Surface),
    /// A navigation target outside `1..=total`.
    InvalidIndex { index: usize, total: usize },
}

impl CarouselError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CarouselError::MissingSurface(_) => "error-missing-surface",
            CarouselError::InvalidIndex { .. } => "error-invalid-index",
        }
    }

    /// Returns the Fluent arguments used by the localized message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            CarouselError::MissingSurface(surface) => vec![("surface", surface.to_string())],
            CarouselError::InvalidIndex { index, total } => vec![
                ("index", index.to_string()),
                ("total", total.to_string()),
            ],
        }
    }
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::MissingSurface(surface) => {
                write!(f, "Missing display surface: {}", surface)
            }
            CarouselError::InvalidIndex { index, total } => {
                write!(f, "Slide {} is outside 1..={}", index, total)
            }
        }
    }
}

impl std::error::Error for CarouselError {}
