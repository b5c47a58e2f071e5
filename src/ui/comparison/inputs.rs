// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied images and labels.

use crate::config::defaults::{DEFAULT_AFTER_LABEL, DEFAULT_BEFORE_LABEL, DEFAULT_HINT};
use iced::widget::image::Handle;
use std::path::Path;

/// What the comparison shows. Both images are required for anything to render.
#[derive(Debug, Clone)]
pub struct ComparisonInputs {
    pub before_image: Option<Handle>,
    pub after_image: Option<Handle>,
    pub before_label: String,
    pub after_label: String,
    pub hint: String,
}

impl ComparisonInputs {
    /// Inputs with the default labels ("Original" / "Sample").
    #[must_use]
    pub fn new(before_image: Option<Handle>, after_image: Option<Handle>) -> Self {
        Self {
            before_image,
            after_image,
            before_label: DEFAULT_BEFORE_LABEL.to_string(),
            after_label: DEFAULT_AFTER_LABEL.to_string(),
            hint: DEFAULT_HINT.to_string(),
        }
    }

    /// Replaces the "before" label; `None` keeps the current one.
    #[must_use]
    pub fn before_label(mut self, label: Option<impl Into<String>>) -> Self {
        if let Some(label) = label {
            self.before_label = label.into();
        }
        self
    }

    /// Replaces the "after" label; `None` keeps the current one.
    #[must_use]
    pub fn after_label(mut self, label: Option<impl Into<String>>) -> Self {
        if let Some(label) = label {
            self.after_label = label.into();
        }
        self
    }

    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Both images, or `None` when either is missing.
    #[must_use]
    pub fn images(&self) -> Option<(&Handle, &Handle)> {
        Some((self.before_image.as_ref()?, self.after_image.as_ref()?))
    }
}

impl Default for ComparisonInputs {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Turns a path argument into an image reference. Blank input means "absent".
#[must_use]
pub fn image_reference(path: &str) -> Option<Handle> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(Handle::from_path(Path::new(trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let inputs = ComparisonInputs::default();
        assert_eq!(inputs.before_label, "Original");
        assert_eq!(inputs.after_label, "Sample");
        assert_eq!(inputs.hint, "drag to compare");
    }

    #[test]
    fn labels_can_be_overridden() {
        let inputs = ComparisonInputs::default()
            .before_label(Some("Raw"))
            .after_label(None::<String>)
            .hint("slide");
        assert_eq!(inputs.before_label, "Raw");
        assert_eq!(inputs.after_label, "Sample");
        assert_eq!(inputs.hint, "slide");
    }

    #[test]
    fn images_require_both_references() {
        let handle = Handle::from_path("before.png");
        assert!(ComparisonInputs::new(Some(handle.clone()), None)
            .images()
            .is_none());
        assert!(ComparisonInputs::new(None, Some(handle.clone()))
            .images()
            .is_none());
        assert!(ComparisonInputs::new(Some(handle.clone()), Some(handle))
            .images()
            .is_some());
    }

    #[test]
    fn blank_paths_are_absent() {
        assert!(image_reference("").is_none());
        assert!(image_reference("   ").is_none());
        assert!(image_reference("after.jpg").is_some());
    }
}
