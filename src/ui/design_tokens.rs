// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the carousel screen.
//!
//! ```
//! use iced_slides::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let control_bg = Color {
//!     a: opacity::CONTROL,
//!     ..palette::BLACK
//! };
//! let gap = spacing::MD;
//! # let _ = (control_bg, gap);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ACCENT_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

pub mod opacity {
    pub const IDLE_INDICATOR: f32 = 0.35;
    pub const CONTROL: f32 = 0.5;
    pub const CONTROL_HOVER: f32 = 0.8;
    pub const CONTROL_PRESSED: f32 = 0.9;
}

/// 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Diameter of an idle slide indicator.
    pub const INDICATOR: f32 = 12.0;
    /// Width of the indicator for the current slide.
    pub const INDICATOR_ACTIVE: f32 = 28.0;
    pub const CONTROL: f32 = 44.0;
    pub const PROGRESS_HEIGHT: f32 = 4.0;
}

pub mod typography {
    pub const SLIDE_TITLE: f32 = 40.0;
    /// Title size once an emphasize animation has played.
    pub const SLIDE_TITLE_EMPHASIZED: f32 = 48.0;
    pub const SLIDE_BODY: f32 = 22.0;
    pub const CAPTION: f32 = 14.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(sizing::INDICATOR_ACTIVE > sizing::INDICATOR);
    assert!(sizing::CONTROL >= 44.0);
    assert!(typography::SLIDE_TITLE_EMPHASIZED > typography::SLIDE_TITLE);
    assert!(typography::SLIDE_TITLE > typography::SLIDE_BODY);
    assert!(opacity::CONTROL < opacity::CONTROL_HOVER);
};
