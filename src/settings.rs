//! Game settings
//!
//! Field layout, run seed and audio preferences. Loaded from a JSON file;
//! any field left out takes its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Geometry;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SettingsError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Field width before pixel-ratio scaling
    pub base_width: f32,
    /// Field height before pixel-ratio scaling
    pub base_height: f32,
    /// Device pixel ratio applied to every size and speed
    pub pixel_ratio: f32,
    pub enemy_rows: u32,
    pub enemies_per_row: u32,
    pub star_count: usize,

    /// Run seed; the same seed replays the same session
    pub seed: u64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_width: BASE_WIDTH,
            base_height: BASE_HEIGHT,
            pixel_ratio: PIXEL_RATIO,
            enemy_rows: ENEMY_ROWS,
            enemies_per_row: ENEMIES_PER_ROW,
            star_count: STAR_COUNT,

            seed: DEFAULT_SEED,

            master_volume: DEFAULT_MASTER_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the field can hold the player and the full formation
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("base_width", self.base_width),
            ("base_height", self.base_height),
            ("pixel_ratio", self.pixel_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(field, format!("must be positive, got {value}")));
            }
        }

        if self.enemy_rows == 0 {
            return Err(SettingsError::invalid("enemy_rows", "need at least one row"));
        }
        if self.enemies_per_row == 0 {
            return Err(SettingsError::invalid("enemies_per_row", "need at least one column"));
        }

        for (field, value) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::invalid(field, format!("must be within 0..=1, got {value}")));
            }
        }

        let geometry = self.geometry();
        if geometry.player_max_x() < 0.0 {
            return Err(SettingsError::invalid("base_width", "narrower than the player"));
        }
        let origin = geometry.formation_origin();
        let pitch = geometry.enemy_pitch();
        let right = origin.x + (self.enemies_per_row - 1) as f32 * pitch;
        if right > geometry.enemy_max_x() {
            return Err(SettingsError::invalid(
                "enemies_per_row",
                format!("{} columns do not fit a {}-wide field", self.enemies_per_row, geometry.width),
            ));
        }
        let bottom = origin.y + self.enemy_rows as f32 * pitch;
        if bottom > geometry.height - geometry.player_size {
            return Err(SettingsError::invalid(
                "enemy_rows",
                format!("{} rows reach the player's lane", self.enemy_rows),
            ));
        }

        Ok(())
    }

    /// Ratio-scaled geometry for the simulation
    pub fn geometry(&self) -> Geometry {
        Geometry {
            enemy_rows: self.enemy_rows,
            enemies_per_row: self.enemies_per_row,
            star_count: self.star_count,
            ..Geometry::scaled(self.base_width, self.base_height, self.pixel_ratio)
        }
    }
}
