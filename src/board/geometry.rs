//! Pixel <-> square conversions.
//!
//! Screen row 0 is the top of the window while rank 1 is drawn at the bottom,
//! so the vertical axis is inverted: `rank = 7 - screen_row`.

use super::error::GestureError;
use super::square::Square;
use crate::util::Rect;

/// Maps a pixel position to the square under it.
///
/// Uses floor division, so pixels left of or above the board land on negative
/// coordinates. Anything outside the 8x8 board is reported as
/// [`GestureError::OutOfBounds`] with the raw file/rank it mapped to.
/// A `square_size` below 1 is treated as 1.
pub fn pixel_to_square(x: i32, y: i32, square_size: i32) -> Result<Square, GestureError> {
    let square_size = square_size.max(1);
    let file = x.div_euclid(square_size);
    let screen_row = y.div_euclid(square_size);
    let rank = 7i32.saturating_sub(screen_row);
    Square::new(file, rank).ok_or(GestureError::OutOfBounds { file, rank })
}

/// Returns the pixel rectangle covered by `square`.
pub fn square_to_pixel_rect(square: Square, square_size: i32) -> Rect {
    let col = i32::from(square.file());
    let row = 7 - i32::from(square.rank());
    Rect {
        x: col * square_size,
        y: row * square_size,
        width: square_size,
        height: square_size,
    }
}

/// Board layout in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Edge length of one square in pixels (always positive)
    pub square_size: i32,
}

impl BoardGeometry {
    pub fn new(square_size: i32) -> Self {
        Self {
            square_size: square_size.max(1),
        }
    }

    /// Edge length of the whole board in pixels.
    pub fn board_pixels(&self) -> i32 {
        self.square_size * 8
    }

    pub fn pixel_to_square(&self, x: i32, y: i32) -> Result<Square, GestureError> {
        pixel_to_square(x, y, self.square_size)
    }

    pub fn square_rect(&self, square: Square) -> Rect {
        square_to_pixel_rect(square, self.square_size)
    }

    /// Centre pixel of `square`.
    pub fn square_center(&self, square: Square) -> (i32, i32) {
        let rect = self.square_rect(square);
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(64)
    }
}
