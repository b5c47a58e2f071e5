// SPDX-License-Identifier: MPL-2.0
//! Image probing for the comparison inputs.
//!
//! Both sides of the comparison are drawn with `ContentFit::Contain` in the same
//! frame, so two images only line up under the divider when their aspect
//! ratios match. This module reads image headers (without decoding pixels) so
//! the viewer can warn about a mismatch.

use crate::error::Result;
use std::path::Path;

/// Relative aspect ratio difference below which two images count as aligned.
const ASPECT_TOLERANCE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    /// Width divided by height, or `None` for an empty image.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// How two images will overlap inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Same aspect ratio: content lines up under the divider.
    Aligned,
    /// Different aspect ratios: letterboxing differs per side.
    Mismatched {
        before: ImageDimensions,
        after: ImageDimensions,
    },
}

/// Reads the pixel dimensions of an image file from its header.
pub fn probe_dimensions(path: &Path) -> Result<ImageDimensions> {
    let (width, height) = image_rs::image_dimensions(path)?;
    Ok(ImageDimensions { width, height })
}

/// Compares two dimension sets.
#[must_use]
pub fn alignment_of(before: ImageDimensions, after: ImageDimensions) -> Alignment {
    match (before.aspect_ratio(), after.aspect_ratio()) {
        (Some(a), Some(b)) if ((a - b) / b).abs() <= ASPECT_TOLERANCE => Alignment::Aligned,
        _ => Alignment::Mismatched { before, after },
    }
}

/// Probes both files and reports whether they will line up.
pub fn check_alignment(before: &Path, after: &Path) -> Result<Alignment> {
    Ok(alignment_of(
        probe_dimensions(before)?,
        probe_dimensions(after)?,
    ))
}
