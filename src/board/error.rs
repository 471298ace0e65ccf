//! Errors produced while resolving a single drag gesture.

use super::piece::Move;
use thiserror::Error;

/// Why a gesture did not change the board.
///
/// Both variants are recovered locally by the session: the gesture becomes a
/// no-op and the interaction loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureError {
    /// The rules engine does not list the move for the current position.
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    /// The pointer mapped to coordinates outside the 8x8 board.
    #[error("Pointer outside the board (file {file}, rank {rank})")]
    OutOfBounds { file: i32, rank: i32 },
}
