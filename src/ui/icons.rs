// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`, so repeated `view` calls do not re-parse them.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
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

define_icon!(
    move_horizontal,
    "move_horizontal.svg",
    "Horizontal drag icon: a line with arrow heads on both ends."
);

/// Sizes an icon to a square and tints it with a theme-dependent color.
pub fn sized<'a>(icon: Svg<'a>, size: f32, color: impl Fn(&Theme) -> Color + 'a) -> Svg<'a> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme, _status| svg::Style {
            color: Some(color(theme)),
        })
}
