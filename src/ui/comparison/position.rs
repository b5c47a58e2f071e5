// SPDX-License-Identifier: MPL-2.0
//! Divider position and the pointer-to-percentage conversion.

use crate::config::defaults::{DEFAULT_SLIDER_PERCENT, MAX_SLIDER_PERCENT, MIN_SLIDER_PERCENT};
use iced::Rectangle;

/// Width of the visible "before" clip region, as a percentage of the frame
/// width. Guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPosition(f32);

impl SliderPosition {
    /// Creates a new position, clamping the value to the valid range.
    ///
    /// `NaN` maps to the default split.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_SLIDER_PERCENT, MAX_SLIDER_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the frame width (e.g., 25% → 0.25).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self(DEFAULT_SLIDER_PERCENT)
    }
}

/// On-screen bounds of the comparison frame, read when an interaction happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerGeometry {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts a horizontal pointer coordinate into a divider position:
    /// `clamp((x - left) / width * 100, 0, 100)`.
    ///
    /// Returns `None` for a degenerate frame (zero, negative or non-finite
    /// width, non-finite left edge) or a non-finite pointer coordinate.
    #[must_use]
    pub fn position_at(&self, pointer_x: f32) -> Option<SliderPosition> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !self.left.is_finite()
            || !pointer_x.is_finite()
        {
            return None;
        }
        let percent = (pointer_x - self.left) / self.width * 100.0;
        Some(SliderPosition::new(percent))
    }

    /// Horizontal screen coordinate of the divider for `position`.
    #[must_use]
    pub fn divider_x(&self, position: SliderPosition) -> f32 {
        self.left + self.width * position.as_fraction()
    }
}

impl From<Rectangle> for ContainerGeometry {
    fn from(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }
}

impl From<ContainerGeometry> for Rectangle {
    fn from(geometry: ContainerGeometry) -> Self {
        Rectangle {
            x: geometry.left,
            y: geometry.top,
            width: geometry.width,
            height: geometry.height,
        }
    }
}
