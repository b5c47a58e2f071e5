// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the viewer.
//!
//! Localizes the viewer's own strings (default labels, hint, empty state) using
//! the Fluent localization system. The comparison widget itself only displays
//! the strings it is given.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
