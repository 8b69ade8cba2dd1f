// SPDX-License-Identifier: MPL-2.0
//! Button styles for the previous/next controls and slide indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent control drawn over the slide track.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::CONTROL_HOVER,
        button::Status::Pressed => opacity::CONTROL_PRESSED,
        _ => opacity::CONTROL,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Pill-shaped indicator; `color` carries the active or idle tint.
pub fn indicator(color: Color, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (active, status) {
            (true, _) => 1.0,
            (false, button::Status::Hovered | button::Status::Pressed) => opacity::CONTROL_HOVER,
            (false, _) => opacity::IDLE_INDICATOR,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..color })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
