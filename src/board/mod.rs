//! Chess board addressing, coordinate mapping and the rules-engine façade.
//!
//! - [`Square`], [`Piece`], [`Move`]: plain value types
//! - [`geometry`]: pixel <-> square mapping
//! - [`BoardModel`]: the only writer of the position, backed by `shakmaty`

pub mod error;
pub mod geometry;
pub mod model;
pub mod piece;
pub mod square;

pub use error::GestureError;
pub use geometry::{BoardGeometry, pixel_to_square, square_to_pixel_rect};
pub use model::{BoardModel, BoardSnapshot, GameStatus};
pub use piece::{Move, Piece, PieceKind, Side};
pub use square::{ParseSquareError, Square};
