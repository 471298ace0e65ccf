//! Configuration type definitions.

use super::enums::{ColorSpec, PromotionChoice};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Board appearance settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Edge length of one square in pixels (valid range: 16 - 256)
    #[serde(default = "default_square_size")]
    pub square_size: i32,

    /// Light square color - a named color or an RGB array like `[238, 238, 210]`
    #[serde(default = "default_light_color")]
    pub light_color: ColorSpec,

    /// Dark square color - a named color or an RGB array like `[118, 150, 86]`
    #[serde(default = "default_dark_color")]
    pub dark_color: ColorSpec,

    /// Font family used for the piece glyphs (must provide the Unicode chess symbols)
    #[serde(default = "default_piece_font")]
    pub piece_font: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: default_square_size(),
            light_color: default_light_color(),
            dark_color: default_dark_color(),
            piece_font: default_piece_font(),
        }
    }
}

/// Move submission settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RulesConfig {
    /// Piece a pawn dropped on its last rank becomes
    /// (queen, rook, bishop, knight, or none to reject such drops)
    #[serde(default = "default_auto_promotion")]
    pub auto_promotion: PromotionChoice,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            auto_promotion: default_auto_promotion(),
        }
    }
}

/// Performance tuning options.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Main loop ticks per second (valid range: 0 - 240, 0 = run unpaced)
    /// Only affects how smoothly the dragged piece follows the pointer
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
        }
    }
}

/// Diagnostic output settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticsConfig {
    /// Log every rejected move (illegal or dropped off the board) at warn level
    #[serde(default = "default_report_illegal_moves")]
    pub report_illegal_moves: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            report_illegal_moves: default_report_illegal_moves(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_square_size() -> i32 {
    64
}

fn default_light_color() -> ColorSpec {
    ColorSpec::Rgb([238, 238, 210])
}

fn default_dark_color() -> ColorSpec {
    ColorSpec::Rgb([118, 150, 86])
}

fn default_piece_font() -> String {
    "Sans".to_string()
}

fn default_auto_promotion() -> PromotionChoice {
    PromotionChoice::Queen
}

fn default_tick_rate() -> u32 {
    60
}

fn default_report_illegal_moves() -> bool {
    true
}
