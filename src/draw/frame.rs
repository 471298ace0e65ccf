//! Per-frame render descriptor.

use super::color::BoardColors;
use crate::board::{Piece, Square};

/// A piece drawn on its square; `(x, y)` is the top-left pixel of the square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPiece {
    pub square: Square,
    pub piece: Piece,
    pub x: i32,
    pub y: i32,
}

/// The piece following the pointer; `(x, y)` is its top-left pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggedPiece {
    pub piece: Piece,
    pub x: i32,
    pub y: i32,
}

/// Everything the renderer needs to paint one frame.
///
/// Rebuilt from the board and drag state every tick and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescriptor {
    pub colors: BoardColors,
    /// Edge length of one square in pixels
    pub square_size: i32,
    /// Pieces at rest, in a1..h8 order, excluding the lifted one
    pub pieces: Vec<PlacedPiece>,
    /// Lifted piece drawn on top of everything else
    pub dragged: Option<DraggedPiece>,
}

impl RenderDescriptor {
    /// Board edge length in pixels.
    pub fn board_pixels(&self) -> i32 {
        self.square_size * 8
    }
}
