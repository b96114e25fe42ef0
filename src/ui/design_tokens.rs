// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, and radii.
//!
//! Tokens are shared across components so spacing and color stay consistent;
//! keep ratios intact when adjusting (e.g. `MD = XS * 2`).

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.94);

    /// Deep slate used for the modal header bar.
    pub const SLATE_900: Color = Color::from_rgb(0.06, 0.09, 0.16);
    /// Accent gold used for tags and the card action button.
    pub const GOLD_500: Color = Color::from_rgb(0.83, 0.69, 0.22);
    pub const GOLD_100: Color = Color::from_rgb(0.97, 0.93, 0.80);
}

pub mod opacity {
    /// Modal backdrop dimming.
    pub const BACKDROP: f32 = 0.6;
    /// Hover emphasis on overlay buttons.
    pub const OVERLAY_HOVER: f32 = 0.12;
}

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Fixed card width inside the grid.
    pub const CARD_WIDTH: f32 = 320.0;
    /// Thumbnail height on a card.
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;
    /// Small inline icon (close button, eye).
    pub const ICON_SM: f32 = 18.0;
    /// Modal preview surface width/height.
    pub const PREVIEW_WIDTH: f32 = 960.0;
    pub const PREVIEW_HEIGHT: f32 = 600.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
    pub const TITLE: f32 = 18.0;
    pub const HEADING: f32 = 28.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 12.0;
}
