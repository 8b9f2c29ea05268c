//! Pipanoid - a fixed-timestep brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, stepper)
//! - `config`: Data-driven tuning loaded from JSON
//! - `platform`: Input and frame timing at the presentation boundary
//! - `renderer`: Scene tessellation and HUD text
//! - `app`: The render loop tying a presenter to the stepper

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::{App, RunSummary};
pub use config::{Config, ConfigError, DisplayConfig, SimConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds
    pub const STEP_MS: f32 = 1.0;

    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed per axis, pixels per millisecond
    pub const BALL_SPEED: f32 = 0.6;
    /// Gap between the ball and the paddle top while waiting for launch
    pub const SERVE_GAP: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 0.8;
    /// Paddle centre distance from the bottom wall
    pub const PADDLE_FLOOR_OFFSET: f32 = 50.0;

    /// Brick grid defaults (11 x 4 = 44 bricks)
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: u32 = 11;
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_SPACING: f32 = 3.0;
    /// Centre of the first column
    pub const BRICK_LEFT_MARGIN: f32 = 85.0;
    /// Centre of the first row
    pub const BRICK_TOP_MARGIN: f32 = 46.0;

    /// Presentation defaults
    pub const WINDOW_TITLE: &str = "Pipanoid";
    pub const FRAME_RATE_LIMIT: u32 = 60;
    pub const FONT_PATH: &str = "fonts/JetBrainsMono-Regular.ttf";
    pub const SCORE_TEXT_SIZE: u32 = 20;
    pub const SCORE_TEXT_Y: f32 = 15.0;
}
