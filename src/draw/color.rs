//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use chessdrag::draw::Color;
/// let light = Color::from_rgb8(238, 238, 210);
/// assert_eq!(light.a, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 0-255 components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Default light square color (238, 238, 210)
pub const LIGHT_SQUARE: Color = Color::from_rgb8(238, 238, 210);

/// Default dark square color (118, 150, 86)
pub const DARK_SQUARE: Color = Color::from_rgb8(118, 150, 86);

pub const RED: Color = Color::from_rgb8(255, 0, 0);
pub const GREEN: Color = Color::from_rgb8(0, 255, 0);
pub const BLUE: Color = Color::from_rgb8(0, 0, 255);
pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);
pub const ORANGE: Color = Color::from_rgb8(255, 128, 0);
pub const PINK: Color = Color::from_rgb8(255, 0, 255);
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);

/// Light and dark square colors used for the checkerboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardColors {
    pub light: Color,
    pub dark: Color,
}

impl BoardColors {
    /// Color of the square at screen `(row, col)`; `(0, 0)` is the top-left (a8) and light.
    pub fn for_cell(&self, row: i32, col: i32) -> Color {
        if (row + col) % 2 == 0 {
            self.light
        } else {
            self.dark
        }
    }
}

impl Default for BoardColors {
    fn default() -> Self {
        Self {
            light: LIGHT_SQUARE,
            dark: DARK_SQUARE,
        }
    }
}
