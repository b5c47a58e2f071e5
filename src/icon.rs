// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Uses the project SVG and rasterizes it at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::error::{Error, Result};
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized window icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    match rasterize_branding(ICON_SIZE) {
        Ok(rgba) => icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok(),
        Err(err) => {
            tracing::warn!(%err, "window icon unavailable");
            None
        }
    }
}

/// Renders the branding SVG into a square RGBA buffer of `target` pixels.
fn rasterize_branding(target: u32) -> Result<Vec<u8>> {
    // Embed the SVG so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_compare.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .map_err(|err| Error::Svg(err.to_string()))?;

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)
        .ok_or_else(|| Error::Svg(format!("cannot allocate {target}x{target} pixmap")))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap.data().to_vec())
}
