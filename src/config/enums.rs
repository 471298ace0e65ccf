//! Configuration enum types.

use crate::board::PieceKind;
use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// light_color = "white"
///
/// # Custom RGB color (0-255 per component)
/// dark_color = [118, 150, 86]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: light-square, dark-square, white, black, red, green, blue, yellow, orange, pink
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped with `util::name_to_color()`; unknown names fall
    /// back to `fallback` with a warning. RGB arrays become opaque colors.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using default", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Piece a pawn becomes when dropped on its last rank.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
    /// Reject promotion drops (the engine requires a piece)
    None,
}

impl PromotionChoice {
    pub fn piece_kind(self) -> Option<PieceKind> {
        match self {
            PromotionChoice::Queen => Some(PieceKind::Queen),
            PromotionChoice::Rook => Some(PieceKind::Rook),
            PromotionChoice::Bishop => Some(PieceKind::Bishop),
            PromotionChoice::Knight => Some(PieceKind::Knight),
            PromotionChoice::None => None,
        }
    }
}
