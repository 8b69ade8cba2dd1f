// SPDX-License-Identifier: MPL-2.0
//! One-based slide position.

use super::CarouselError;
use std::fmt;

/// Position of a slide in the deck, counted from 1.
///
/// Values are produced either by range-checked construction against a total
/// ([`SlideNumber::new`]) or by the carousel itself, so a `SlideNumber` held
/// by a carousel is always inside `1..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideNumber(usize);

impl SlideNumber {
    /// The first slide.
    pub const FIRST: Self = Self(1);

    /// Creates a slide number, rejecting anything outside `1..=total`.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidIndex`] when `index` is zero or greater
    /// than `total`. The value is never clamped.
    pub fn new(index: usize, total: usize) -> Result<Self, CarouselError> {
        if (1..=total).contains(&index) {
            Ok(Self(index))
        } else {
            Err(CarouselError::InvalidIndex { index, total })
        }
    }

    /// Creates a slide number from a zero-based position (e.g. an `enumerate` index).
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// Returns the one-based value.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the zero-based position, for indexing slices.
    #[must_use]
    pub fn position(self) -> usize {
        self.0 - 1
    }

    /// Slide after this one, wrapping to the first after `total`.
    #[must_use]
    pub fn wrapping_next(self, total: usize) -> Self {
        if self.0 >= total {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Slide before this one, wrapping to `total` before the first.
    #[must_use]
    pub fn wrapping_previous(self, total: usize) -> Self {
        if self.0 <= 1 {
            Self(total)
        } else {
            Self(self.0 - 1)
        }
    }

    /// Slide after this one, or `None` at `total`.
    #[must_use]
    pub fn checked_next(self, total: usize) -> Option<Self> {
        (self.0 < total).then(|| Self(self.0 + 1))
    }

    /// Slide before this one, or `None` at the first slide.
    #[must_use]
    pub fn checked_previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl Default for SlideNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for SlideNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
