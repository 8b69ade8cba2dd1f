// SPDX-License-Identifier: MPL-2.0
//! `iced_slides` is a slide presenter built with the Iced GUI framework.
//!
//! The [`carousel`] module holds the navigation engine: a one-based slide
//! index, an 800 ms transition lock, wrap-around navigation, swipe and key
//! resolution, and a display-surface seam. The [`app`] and [`ui`] modules
//! host that engine in an Iced window, loading decks from TOML files.

#![doc(html_root_url = "https://docs.rs/iced_slides/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
