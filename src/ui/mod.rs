// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`comparison`] - Before/after slider component (state, messages, view)
//! - [`widgets`] - Custom Iced widgets (clipped comparison frame)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color scheme
//! - [`icons`] - SVG icon loading and rendering

pub mod comparison;
pub mod design_tokens;
pub mod icons;
pub mod theming;
pub mod widgets;
