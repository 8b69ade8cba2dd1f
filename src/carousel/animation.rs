// SPDX-License-Identifier: MPL-2.0
//! Post-transition actions keyed by slide.
//!
//! Some slides play a short animation once they have fully arrived. Which
//! slide does what is a plain lookup table rather than a chain of index
//! comparisons, so adding slides never touches the carousel.

use super::SlideNumber;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Animation played on a slide after its transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideAnimation {
    /// Body items stay hidden until the slide arrives, then appear.
    RevealItems,
    /// The slide title switches to the accent colour on arrival.
    Emphasize,
}

/// Mapping from slide to its optional post-transition animation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostTransitionActions {
    actions: HashMap<SlideNumber, SlideAnimation>,
}

impl PostTransitionActions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `animation` for `slide`, replacing any previous entry.
    pub fn insert(&mut self, slide: SlideNumber, animation: SlideAnimation) {
        self.actions.insert(slide, animation);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, slide: SlideNumber, animation: SlideAnimation) -> Self {
        self.insert(slide, animation);
        self
    }

    #[must_use]
    pub fn get(&self, slide: SlideNumber) -> Option<SlideAnimation> {
        self.actions.get(&slide).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<(SlideNumber, SlideAnimation)> for PostTransitionActions {
    fn from_iter<I: IntoIterator<Item = (SlideNumber, SlideAnimation)>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}
