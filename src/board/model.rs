//! Board model façade over the `shakmaty` rules engine.
//!
//! The session never touches the engine position directly: every read goes
//! through [`BoardModel::piece_at`] / [`BoardModel::status`] and the only write
//! path is [`BoardModel::apply`].

use super::error::GestureError;
use super::piece::{Move, Piece, PieceKind, Side};
use super::square::Square;
use log::info;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Position, Role};

/// Game status as reported after each accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check but has legal replies
    Check,
    Checkmate,
    Stalemate,
    /// Insufficient material or the seventy-five-move rule
    Draw,
}

impl GameStatus {
    /// True once no further moves can be played.
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        }
    }
}

/// Comparable copy of everything a move changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub placement: shakmaty::Board,
    pub side_to_move: Side,
    pub halfmoves: u32,
    pub fullmoves: u32,
}

/// Half-moves without capture or pawn move after which the game is drawn.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// The single owner and writer of the chess position.
#[derive(Debug, Clone, Default)]
pub struct BoardModel {
    position: Chess,
    history: Vec<Move>,
}

impl BoardModel {
    /// Creates a board in the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(to_engine_square(square))
            .map(from_engine_piece)
    }

    /// Checks whether `mv` is in the engine's legal move list for the current position.
    ///
    /// Castling is written as the king's two-square step (`e1g1`), promotions
    /// must name the piece.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.find_legal(mv).is_some()
    }

    /// True when some legal move from `from` to `to` is a pawn promotion.
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        let from = to_engine_square(from);
        let to = to_engine_square(to);
        self.position.legal_moves().iter().any(|m| {
            matches!(
                m.to_uci(CastlingMode::Standard),
                UciMove::Normal { from: f, to: t, promotion: Some(_) } if f == from && t == to
            )
        })
    }

    /// Plays `mv` if it is legal, returning the resulting status.
    ///
    /// # Errors
    /// [`GestureError::IllegalMove`] when the move is not legal; the position is
    /// left untouched in that case.
    pub fn apply(&mut self, mv: Move) -> Result<GameStatus, GestureError> {
        let engine_move = self
            .find_legal(&mv)
            .ok_or(GestureError::IllegalMove(mv))?;
        let next = self
            .position
            .clone()
            .play(&engine_move)
            .map_err(|_| GestureError::IllegalMove(mv))?;

        self.position = next;
        self.history.push(mv);
        let status = self.status();
        info!("Played {} ({})", mv, status.as_str());
        Ok(status)
    }

    /// Current game status for the side to move.
    ///
    /// `Draw` is informational: moves the engine still lists stay legal.
    pub fn status(&self) -> GameStatus {
        if self.position.is_checkmate() {
            GameStatus::Checkmate
        } else if self.position.is_stalemate() {
            GameStatus::Stalemate
        } else if self.position.is_insufficient_material()
            || self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
        {
            GameStatus::Draw
        } else if self.position.is_check() {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    pub fn side_to_move(&self) -> Side {
        from_engine_color(self.position.turn())
    }

    /// Moves accepted so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Captures the current position for later comparison.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            placement: self.position.board().clone(),
            side_to_move: self.side_to_move(),
            halfmoves: self.position.halfmoves(),
            fullmoves: self.position.fullmoves().get(),
        }
    }

    fn find_legal(&self, mv: &Move) -> Option<shakmaty::Move> {
        let wanted = UciMove::Normal {
            from: to_engine_square(mv.from),
            to: to_engine_square(mv.to),
            promotion: mv.promotion.map(to_engine_role),
        };
        self.position
            .legal_moves()
            .into_iter()
            .find(|m| m.to_uci(CastlingMode::Standard) == wanted)
    }
}

fn to_engine_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square.index()))
}

fn to_engine_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn from_engine_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn from_engine_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece::new(from_engine_color(piece.color), kind)
}
