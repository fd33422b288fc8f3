//! Tunable game parameters, loadable from a JSON file.
//!
//! Every field defaults to the matching constant in `tds_core::constants`,
//! so a config file only needs to name what it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tds_core::constants::*;
use tds_core::types::{Field, Position, Size};

/// Field, entity and pacing parameters for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub player_start_x: f64,
    pub player_start_y: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub player_speed_x: f64,
    pub player_speed_y: f64,
    pub enemy_width: f64,
    pub enemy_height: f64,
    pub enemy_speed: f64,
    pub enemy_spawn_interval_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed_x: PLAYER_SPEED_X,
            player_speed_y: PLAYER_SPEED_Y,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_interval_ticks: ENEMY_SPAWN_INTERVAL_TICKS,
        }
    }
}

impl GameConfig {
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    pub fn screen(&self) -> Size {
        Size::new(self.screen_width, self.screen_height)
    }

    pub fn player_start(&self) -> Position {
        Position::new(self.player_start_x, self.player_start_y)
    }

    pub fn player_size(&self) -> Size {
        Size::new(self.player_width, self.player_height)
    }

    pub fn enemy_size(&self) -> Size {
        Size::new(self.enemy_width, self.enemy_height)
    }

    /// Reject configs the simulation cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }

        let non_negative = [
            ("player_speed_x", self.player_speed_x),
            ("player_speed_y", self.player_speed_y),
            ("enemy_speed", self.enemy_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be zero or more, got {value}"));
            }
        }

        if self.enemy_spawn_interval_ticks == 0 {
            return Err("enemy_spawn_interval_ticks must be at least 1".into());
        }

        if self.player_width > self.field_width || self.player_height > self.field_height {
            return Err(format!(
                "player ({}x{}) does not fit in the field ({}x{})",
                self.player_width, self.player_height, self.field_width, self.field_height
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        Self::from_json(&json)
    }

    /// Best-effort load: on any failure, log it and fall back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded game config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using default game config");
                Self::default()
            }
        }
    }
}
