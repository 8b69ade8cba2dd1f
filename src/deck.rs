// SPDX-License-Identifier: MPL-2.0
//! Slide deck content.
//!
//! A deck is a TOML file with a title and an ordered list of slides:
//!
//! ```toml
//! title = "Quarterly review"
//!
//! [[slides]]
//! title = "Welcome"
//! body = ["First line", "Second line"]
//! animation = "reveal-items"
//! ```

use crate::carousel::{PostTransitionActions, SlideAnimation, SlideNumber};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One slide's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    /// Played once the slide has fully arrived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<SlideAnimation>,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: &[&str]) -> Self {
        Self {
            title: title.into(),
            body: body.iter().map(|line| (*line).to_string()).collect(),
            animation: None,
        }
    }

    #[must_use]
    pub fn with_animation(mut self, animation: SlideAnimation) -> Self {
        self.animation = Some(animation);
        self
    }
}

/// An ordered sequence of slides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Reads a deck from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Deck`]
    /// if it is not a valid deck.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses deck TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deck`] on malformed input.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Deck(err.to_string()))
    }

    /// Built-in deck shown when no file is given.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            title: Some("Iced Slides".to_string()),
            slides: vec![
                Slide::new(
                    "Welcome",
                    &["Use the arrows, the keyboard or a swipe to move between slides."],
                )
                .with_animation(SlideAnimation::Emphasize),
                Slide::new(
                    "Navigation",
                    &[
                        "Left / Right arrows: previous / next",
                        "Home / End: first / last slide",
                        "Indicators: jump to any slide",
                    ],
                )
                .with_animation(SlideAnimation::RevealItems),
                Slide::new(
                    "Transitions",
                    &["Input is ignored while a slide is moving into place."],
                ),
                Slide::new(
                    "Sharing",
                    &["Open a deck as `talk.toml#slide-4` to start on slide 4."],
                )
                .with_animation(SlideAnimation::RevealItems),
                Slide::new("Thank you", &["Next wraps back to the first slide."])
                    .with_animation(SlideAnimation::Emphasize),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slide(&self, number: SlideNumber) -> Option<&Slide> {
        self.slides.get(number.position())
    }

    /// Collects each slide's animation into the carousel's lookup table.
    #[must_use]
    pub fn post_transition_actions(&self) -> PostTransitionActions {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(position, slide)| {
                slide
                    .animation
                    .map(|animation| (SlideNumber::from_position(position), animation))
            })
            .collect()
    }
}
