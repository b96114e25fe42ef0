// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for cards, tags, and the preview modal.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::border::Radius;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Card surface: raised white panel with rounded corners.
pub fn card(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = if is_dark {
            Color::from_rgb(0.13, 0.15, 0.20)
        } else {
            palette::WHITE
        };
        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: if is_dark {
                    Color::from_rgb(0.25, 0.27, 0.33)
                } else {
                    palette::GRAY_100
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..container::Style::default()
        }
    }
}

/// Tag pill: soft gold background, small radius.
pub fn tag_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD_100)),
        text_color: Some(palette::GRAY_700),
        border: Border {
            color: palette::GOLD_500,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..container::Style::default()
    }
}

/// Placeholder box shown while a thumbnail is loading or unavailable.
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Semi-transparent dimming layer behind the preview modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// The modal dialog surface itself.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        },
        ..container::Style::default()
    }
}

/// Dark header bar at the top of the preview modal.
pub fn modal_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            // Only the top corners are rounded; the bottom edge meets the
            // demo surface flush.
            radius: Radius::new(0.0)
                .top_left(radius::MD)
                .top_right(radius::MD),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Primary action button on a card ("open the demo").
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GOLD_500,
        _ => palette::SLATE_900,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Quiet icon button on the dark modal header (the close affordance).
pub fn header_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::WHITE
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_header_rounds_only_the_top_corners() {
        let style = modal_header(&Theme::Light);
        let corner = style.border.radius;
        assert_eq!(corner.top_left, radius::MD);
        assert_eq!(corner.top_right, radius::MD);
        assert_eq!(corner.bottom_left, 0.0);
        assert_eq!(corner.bottom_right, 0.0);
    }

    #[test]
    fn backdrop_dims_without_full_opacity() {
        let style = backdrop(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("backdrop must have a background color");
        };
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
