// SPDX-License-Identifier: MPL-2.0
use crate::ui::comparison;

/// Top-level messages consumed by [`crate::app::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Comparison(comparison::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Path of the image shown on the left ("before") side.
    pub before: Option<String>,
    /// Path of the image shown on the right ("after") side.
    pub after: Option<String>,
    /// Label override for the left side.
    pub before_label: Option<String>,
    /// Label override for the right side.
    pub after_label: Option<String>,
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
}
