// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-bleed slide surface.
pub fn slide(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Panel shown when the carousel could not start.
pub fn error_panel(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}
