// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are embedded SVGs rendered through Iced's `svg` widget; handles
//! are created once on first access and cached in a `OnceLock`.
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g. `eye`, not `open_demo`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

// Icon constructors are generic over the element lifetime so an icon can sit
// in a widget tree that borrows view state.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(eye, "eye.svg", "Eye outline, used on the card hover overlay and demo button.");
define_icon!(close, "x.svg", "Diagonal cross, used as the modal close affordance.");

/// Constrain an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(size).height(size)
}
