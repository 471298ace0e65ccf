use crate::board::Square;
use crate::draw::{DraggedPiece, PlacedPiece, RenderDescriptor};

use super::{DragState, GameSession};

impl GameSession {
    /// Builds the descriptor for the next frame.
    ///
    /// The piece on the drag origin is left out of the resting pieces and
    /// drawn instead under the pointer, centred on it. Dragging an empty
    /// square draws no floating piece.
    pub fn render_descriptor(&self) -> RenderDescriptor {
        let lifted = self.drag.origin();
        let square_size = self.geometry.square_size;

        let pieces = Square::all()
            .filter(|square| Some(*square) != lifted)
            .filter_map(|square| {
                let piece = self.board.piece_at(square)?;
                let rect = self.geometry.square_rect(square);
                Some(PlacedPiece {
                    square,
                    piece,
                    x: rect.x,
                    y: rect.y,
                })
            })
            .collect();

        let dragged = match self.drag {
            DragState::Dragging {
                origin,
                pointer: (x, y),
            } => self.board.piece_at(origin).map(|piece| DraggedPiece {
                piece,
                x: x.saturating_sub(square_size / 2),
                y: y.saturating_sub(square_size / 2),
            }),
            DragState::Idle => None,
        };

        RenderDescriptor {
            colors: self.colors,
            square_size,
            pieces,
            dragged,
        }
    }
}
