// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by the comparison slider and its host window.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_compare::ui::design_tokens::{palette, sizing};

let divider = palette::ACCENT_500;
let handle = sizing::HANDLE_DIAMETER; // 32px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    // Warm grays (light surfaces)
    pub const STONE_50: Color = Color::from_rgb(0.980, 0.980, 0.976);
    pub const STONE_100: Color = Color::from_rgb(0.961, 0.961, 0.957);
    pub const STONE_200: Color = Color::from_rgb(0.906, 0.898, 0.894);
    pub const STONE_400: Color = Color::from_rgb(0.659, 0.635, 0.620);
    pub const STONE_500: Color = Color::from_rgb(0.471, 0.443, 0.424);

    // Neutral grays (dark surfaces)
    pub const NEUTRAL_800: Color = Color::from_rgb(0.149, 0.149, 0.149);
    pub const NEUTRAL_900: Color = Color::from_rgb(0.090, 0.090, 0.090);
    pub const NEUTRAL_950: Color = Color::from_rgb(0.039, 0.039, 0.039);

    // Accent (divider and handle)
    pub const ACCENT_500: Color = Color::from_rgb(0.976, 0.451, 0.086);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 14.0;
    pub const ICON_SM: f32 = 16.0;

    /// Diameter of the round drag handle.
    pub const HANDLE_DIAMETER: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Empty state text
    pub const BODY: f32 = 14.0;

    /// Caption - Header labels and hint
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Outer card outline
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Clip edge divider
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::ICON_SM > sizing::ICON_XS);
    assert!(sizing::HANDLE_DIAMETER > sizing::ICON_SM);

    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
