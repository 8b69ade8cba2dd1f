// SPDX-License-Identifier: MPL-2.0
//! Shareable slide location.
//!
//! A location is an address like `talk.toml#slide-3` that can be handed to
//! someone else to open the deck on the same slide. The carousel reads it
//! once at startup and publishes to it after each navigation. Neither side
//! is required: publishing to an unsupported location is reported, never fatal.

use super::SlideNumber;
use std::fmt;

const FRAGMENT_PREFIX: &str = "#slide-";

/// Why a location could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// This collaborator cannot store a location.
    Unsupported,
    /// The fragment does not look like `#slide-N`.
    Malformed(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unsupported => write!(f, "location updates are not supported"),
            LocationError::Malformed(raw) => write!(f, "malformed slide location: {}", raw),
        }
    }
}

impl std::error::Error for LocationError {}

/// Optional collaborator holding the shareable slide address.
pub trait SlideLocation {
    /// Slide requested by the location at startup, not yet range-checked.
    fn initial_slide(&self) -> Option<usize>;

    /// Records `slide` as the current location.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Unsupported`] when the location cannot be written.
    fn publish(&mut self, slide: SlideNumber) -> Result<(), LocationError>;
}

/// A location that is never read and cannot be written.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl SlideLocation for NoLocation {
    fn initial_slide(&self) -> Option<usize> {
        None
    }

    fn publish(&mut self, _slide: SlideNumber) -> Result<(), LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Location kept as a `#slide-N` fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentLocation {
    initial: Option<usize>,
    fragment: Option<String>,
}

impl FragmentLocation {
    /// An empty location: no initial slide, nothing published yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from `fragment`.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::Malformed`] if `fragment` is not `#slide-N`
    /// with `N >= 1`.
    pub fn from_fragment(fragment: &str) -> Result<Self, LocationError> {
        let slide = parse_fragment(fragment)?;
        Ok(Self {
            initial: Some(slide),
            fragment: Some(format_fragment(slide)),
        })
    }

    /// Starts from a raw slide number, e.g. restored session state.
    #[must_use]
    pub fn from_slide(slide: usize) -> Self {
        Self {
            initial: Some(slide),
            fragment: Some(format_fragment(slide)),
        }
    }

    /// The last published fragment, or the initial one.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Slide of the last published fragment, or the initial one.
    #[must_use]
    pub fn slide(&self) -> Option<usize> {
        self.fragment.as_deref().and_then(|f| parse_fragment(f).ok())
    }
}

impl SlideLocation for FragmentLocation {
    fn initial_slide(&self) -> Option<usize> {
        self.initial
    }

    fn publish(&mut self, slide: SlideNumber) -> Result<(), LocationError> {
        self.fragment = Some(format_fragment(slide.get()));
        Ok(())
    }
}

/// Formats a slide as `#slide-N`.
#[must_use]
pub fn format_fragment(slide: usize) -> String {
    format!("{FRAGMENT_PREFIX}{slide}")
}

/// Parses `#slide-N` (the leading `#` is optional).
///
/// # Errors
///
/// Returns [`LocationError::Malformed`] for anything else, including `N = 0`.
pub fn parse_fragment(raw: &str) -> Result<usize, LocationError> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
    body.strip_prefix(&FRAGMENT_PREFIX[1..])
        .and_then(|digits| digits.parse::<usize>().ok())
        .filter(|slide| *slide >= 1)
        .ok_or_else(|| LocationError::Malformed(raw.to_string()))
}

/// Splits `path#slide-N` into the path and its optional fragment.
///
/// Only a trailing suffix that parses as `#slide-N` is treated as a
/// fragment; any other `#` belongs to the path.
#[must_use]
pub fn split_location(raw: &str) -> (&str, Option<&str>) {
    match raw.rfind(FRAGMENT_PREFIX) {
        Some(index) if parse_fragment(&raw[index..]).is_ok() => {
            (&raw[..index], Some(&raw[index..]))
        }
        _ => (raw, None),
    }
}
