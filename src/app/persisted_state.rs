// SPDX-License-Identifier: MPL-2.0
//! Session state persistence using CBOR format.
//!
//! This module handles transient state that should persist across sessions
//! but is not user-configurable (unlike preferences in `settings.toml`):
//! which deck was open and which slide was showing.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_SLIDES_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Deck that was open when the window closed. `None` for the demo deck.
    #[serde(default)]
    pub last_deck: Option<PathBuf>,

    /// One-based slide that was showing when the window closed.
    #[serde(default)]
    pub last_slide: Option<usize>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning key explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "discarding unreadable session state");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot open session state");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location.
    ///
    /// Returns an optional warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state to a custom directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %err, "cannot create session folder");
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(path = %path.display(), %err, "cannot write session state");
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot create session file");
                Some("notification-state-create-error".to_string())
            }
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers `slide` as the position reached in `deck`.
    pub fn remember(&mut self, deck: Option<&Path>, slide: usize) {
        self.last_deck = deck.map(Path::to_path_buf);
        self.last_slide = Some(slide);
    }

    /// Slide to resume for `deck`, if the last session was on the same deck.
    #[must_use]
    pub fn resume_slide_for(&self, deck: Option<&Path>) -> Option<usize> {
        if self.last_deck.as_deref() == deck {
            self.last_slide
        } else {
            None
        }
    }
}
