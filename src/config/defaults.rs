// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the comparison slider and its host.
//!
//! # Categories
//!
//! - **Slider**: Position bounds and the initial split
//! - **Frame**: Aspect ratio of the comparison area
//! - **Labels**: Fallback header labels

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Position the divider starts at (even split).
pub const DEFAULT_SLIDER_PERCENT: f32 = 50.0;

/// Leftmost divider position.
pub const MIN_SLIDER_PERCENT: f32 = 0.0;

/// Rightmost divider position.
pub const MAX_SLIDER_PERCENT: f32 = 100.0;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Horizontal term of the comparison frame aspect ratio.
pub const FRAME_ASPECT_WIDTH: f32 = 16.0;

/// Vertical term of the comparison frame aspect ratio.
pub const FRAME_ASPECT_HEIGHT: f32 = 9.0;

/// Width used when the frame is laid out with unbounded horizontal space
/// (e.g. inside a horizontal scrollable).
pub const FALLBACK_FRAME_WIDTH: f32 = 640.0;

// ==========================================================================
// Label Defaults
// ==========================================================================

/// Header label above the "before" side when the caller gives none.
pub const DEFAULT_BEFORE_LABEL: &str = "Original";

/// Header label above the "after" side when the caller gives none.
pub const DEFAULT_AFTER_LABEL: &str = "Sample";

/// Hint shown between the two labels when the caller gives none.
pub const DEFAULT_HINT: &str = "drag to compare";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDER_PERCENT == 0.0);
    assert!(MAX_SLIDER_PERCENT == 100.0);
    assert!(DEFAULT_SLIDER_PERCENT >= MIN_SLIDER_PERCENT);
    assert!(DEFAULT_SLIDER_PERCENT <= MAX_SLIDER_PERCENT);

    assert!(FRAME_ASPECT_WIDTH > 0.0);
    assert!(FRAME_ASPECT_HEIGHT > 0.0);
    assert!(FALLBACK_FRAME_WIDTH > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDER_PERCENT, 50.0);
        assert!(DEFAULT_SLIDER_PERCENT > MIN_SLIDER_PERCENT);
        assert!(DEFAULT_SLIDER_PERCENT < MAX_SLIDER_PERCENT);
    }

    #[test]
    fn frame_is_widescreen() {
        assert_eq!(FRAME_ASPECT_WIDTH / FRAME_ASPECT_HEIGHT, 16.0 / 9.0);
    }

    #[test]
    fn label_defaults_match_widget_contract() {
        assert_eq!(DEFAULT_BEFORE_LABEL, "Original");
        assert_eq!(DEFAULT_AFTER_LABEL, "Sample");
    }
}
