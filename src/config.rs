//! Game tuning and presentation settings
//!
//! Defaults come from [`crate::consts`]. A JSON file may override any subset
//! of fields; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for [`Config`].
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but describe an unplayable arena.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation tuning. Speeds are in pixels per millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Fixed step length in milliseconds
    pub step_ms: f32,
    /// Upper bound on steps per frame; `None` lets the accumulator catch up fully
    pub max_substeps: Option<u32>,
    /// Seed for the serve direction RNG
    pub seed: u64,

    pub ball_radius: f32,
    pub ball_speed: f32,
    pub serve_gap: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_floor_offset: f32,

    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_spacing: f32,
    pub brick_left_margin: f32,
    pub brick_top_margin: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            step_ms: STEP_MS,
            max_substeps: None,
            seed: 0,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            serve_gap: SERVE_GAP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_floor_offset: PADDLE_FLOOR_OFFSET,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_spacing: BRICK_SPACING,
            brick_left_margin: BRICK_LEFT_MARGIN,
            brick_top_margin: BRICK_TOP_MARGIN,
        }
    }
}

impl SimConfig {
    /// Arena size as a vector (width, height)
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Number of bricks in a full grid
    pub fn total_bricks(&self) -> u32 {
        self.brick_columns * self.brick_rows
    }

    /// Centre of the brick at the given grid cell
    pub fn brick_center(&self, column: u32, row: u32) -> Vec2 {
        Vec2::new(
            self.brick_left_margin + column as f32 * (self.brick_width + self.brick_spacing),
            self.brick_top_margin + row as f32 * (self.brick_height + self.brick_spacing),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("step_ms", self.step_ms),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "brick grid must not be empty, got {}x{}",
                self.brick_columns, self.brick_rows
            )));
        }
        if self.max_substeps == Some(0) {
            return Err(ConfigError::Invalid(
                "max_substeps must be at least 1 when set".to_string(),
            ));
        }
        if self.paddle_width > self.arena_width {
            return Err(ConfigError::Invalid(format!(
                "paddle ({}) is wider than the arena ({})",
                self.paddle_width, self.arena_width
            )));
        }

        let last = self.brick_center(self.brick_columns - 1, self.brick_rows - 1);
        if last.x + self.brick_width / 2.0 > self.arena_width
            || last.y + self.brick_height / 2.0 > self.arena_height
        {
            return Err(ConfigError::Invalid(format!(
                "brick grid extends past the arena (last brick at {}, {})",
                last.x, last.y
            )));
        }

        Ok(())
    }
}

/// Window and HUD settings consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_title: String,
    /// Frames per second cap; 0 disables the cap
    pub frame_rate_limit: u32,
    pub font_path: PathBuf,
    pub score_text_size: u32,
    pub score_text_y: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            frame_rate_limit: FRAME_RATE_LIMIT,
            font_path: PathBuf::from(FONT_PATH),
            score_text_size: SCORE_TEXT_SIZE,
            score_text_y: SCORE_TEXT_Y,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sim: SimConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.sim.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.sim.validate().is_ok());
        assert_eq!(config.sim.total_bricks(), 44);
    }

    #[test]
    fn test_default_grid_matches_classic_layout() {
        let sim = SimConfig::default();
        // First brick at (1 * 63 + 22, 2 * 23), last at (11 * 63 + 22, 5 * 23)
        assert_eq!(sim.brick_center(0, 0), Vec2::new(85.0, 46.0));
        assert_eq!(sim.brick_center(10, 3), Vec2::new(715.0, 115.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "sim": { "seed": 7, "brick_rows": 2 } }"#)
            .expect("valid config");
        assert_eq!(config.sim.seed, 7);
        assert_eq!(config.sim.brick_rows, 2);
        assert_eq!(config.sim.brick_columns, BRICK_COLUMNS);
        assert_eq!(config.display.window_title, WINDOW_TITLE);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_json_str(r#"{ "sim": { "step_ms": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json_str(r#"{ "sim": { "brick_columns": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json_str(r#"{ "sim": { "brick_columns": 20 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Config::load("does/not/exist.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
