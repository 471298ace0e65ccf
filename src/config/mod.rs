//! Configuration file support for chessdrag.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/chessdrag/config.toml`. Settings include board geometry and
//! colors, promotion handling, loop pacing, and diagnostic output.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, PromotionChoice};
pub use types::{BoardConfig, DiagnosticsConfig, PerformanceConfig, RulesConfig};

use crate::board::BoardGeometry;
use crate::draw::{BoardColors, color};
use crate::session::SessionSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [board]
/// square_size = 64
/// light_color = [238, 238, 210]
/// dark_color = [118, 150, 86]
///
/// [rules]
/// auto_promotion = "queen"
///
/// [performance]
/// tick_rate = 60
///
/// [diagnostics]
/// report_illegal_moves = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Board geometry and colors
    #[serde(default)]
    pub board: BoardConfig,

    /// Move submission settings
    #[serde(default)]
    pub rules: RulesConfig,

    /// Main loop pacing
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Diagnostic output
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `square_size`: 16 - 256
    /// - `tick_rate`: 0 - 240
    /// - `piece_font`: non-empty
    pub fn validate_and_clamp(&mut self) {
        // Square size: 16 - 256
        if !(16..=256).contains(&self.board.square_size) {
            log::warn!(
                "Invalid square_size {}, clamping to 16-256 range",
                self.board.square_size
            );
            self.board.square_size = self.board.square_size.clamp(16, 256);
        }

        // Tick rate: 0 (unpaced) - 240
        if self.performance.tick_rate > 240 {
            log::warn!(
                "Invalid tick_rate {}, clamping to 240",
                self.performance.tick_rate
            );
            self.performance.tick_rate = 240;
        }

        if self.board.piece_font.trim().is_empty() {
            log::warn!("Empty piece_font, falling back to 'Sans'");
            self.board.piece_font = "Sans".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/chessdrag/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("chessdrag");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration text and clamps it to valid ranges.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Board colors resolved from the color specs.
    pub fn board_colors(&self) -> BoardColors {
        BoardColors {
            light: self.board.light_color.to_color(color::LIGHT_SQUARE),
            dark: self.board.dark_color.to_color(color::DARK_SQUARE),
        }
    }

    /// Settings for a new game session.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            geometry: BoardGeometry::new(self.board.square_size),
            colors: self.board_colors(),
            auto_promotion: self.rules.auto_promotion.piece_kind(),
            report_illegal_moves: self.diagnostics.report_illegal_moves,
        }
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
