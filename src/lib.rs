// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after image comparison slider for the Iced GUI
//! framework.
//!
//! The reusable part is [`ui::comparison`]: a component that overlays two
//! images and reveals the "before" one up to a draggable divider. The binary
//! wraps it in a single window with Fluent localization and a small settings
//! file.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod tracing_setup;
pub mod ui;
