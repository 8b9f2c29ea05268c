//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (brick creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod scene;
pub mod state;
pub mod stepper;
pub mod tick;

pub use collision::{
    Penetration, WallContact, overlaps, penetration, resolve_brick_ball, resolve_paddle_ball,
    wall_contact,
};
pub use geometry::{Bounds, Circle, Rect};
pub use scene::{BallView, RectView, Scene};
pub use state::{Ball, BallState, Brick, GameState, Paddle, generate_bricks};
pub use stepper::{FrameOutcome, InputSnapshot, Stepper};
pub use tick::{TickInput, TickOutcome, tick};
