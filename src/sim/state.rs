//! Game state and core simulation types
//!
//! Every entity embeds a geometry value from [`super::geometry`] and exposes
//! its bounds through [`Bounds`], so collision code works on any of them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Circle, Rect};
use super::scene::Scene;
use crate::config::SimConfig;

/// Ball mode - pinned to the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball sits above the paddle centre with zero velocity until launched
    AwaitingLaunch,
    /// Ball moves and bounces
    InPlay,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub shape: Circle,
    pub vel: Vec2,
    pub state: BallState,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            shape: Circle::new(pos, radius),
            vel: Vec2::ZERO,
            state: BallState::AwaitingLaunch,
        }
    }

    #[inline]
    pub fn awaiting_launch(&self) -> bool {
        self.state == BallState::AwaitingLaunch
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.shape.radius()
    }

    /// Park the ball just above the paddle centre with zero velocity
    pub fn pin_above(&mut self, paddle: &Paddle, gap: f32) {
        self.vel = Vec2::ZERO;
        self.shape.pos = Vec2::new(paddle.x(), paddle.top() - self.radius() - gap);
    }

    /// Leave the paddle, heading up and to the chosen side
    pub fn launch(&mut self, speed: f32, rightward: bool) {
        if self.awaiting_launch() {
            let vx = if rightward { speed } else { -speed };
            self.vel = Vec2::new(vx, -speed);
            self.state = BallState::InPlay;
        }
    }

    /// Put the ball back on the paddle for the next round
    pub fn return_to_paddle(&mut self, paddle: &Paddle, gap: f32) {
        self.state = BallState::AwaitingLaunch;
        self.pin_above(paddle, gap);
    }
}

impl Bounds for Ball {
    #[inline]
    fn center(&self) -> Vec2 {
        self.shape.center()
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        self.shape.half_extents()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub shape: Rect,
    /// Horizontal velocity (pixels per millisecond)
    pub vel: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            shape: Rect::new(pos, size),
            vel: 0.0,
        }
    }

    /// Derive velocity from held keys. Left wins over right; a direction is
    /// ignored while the paddle already touches that wall.
    pub fn steer(&mut self, move_left: bool, move_right: bool, speed: f32, arena_width: f32) {
        self.vel = if move_left && self.left() > 0.0 {
            -speed
        } else if move_right && self.right() < arena_width {
            speed
        } else {
            0.0
        };
    }

    /// Advance by velocity and keep the paddle inside the arena
    pub fn integrate(&mut self, dt: f32, arena_width: f32) {
        let half = self.half_extents().x;
        let x = (self.shape.pos.x + self.vel * dt).clamp(half, arena_width - half);
        self.shape.pos.x = x;
    }
}

impl Bounds for Paddle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.shape.center()
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        self.shape.half_extents()
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub shape: Rect,
    pub destroyed: bool,
    /// Grid cell this brick was created in
    pub column: u32,
    pub row: u32,
}

impl Bounds for Brick {
    #[inline]
    fn center(&self) -> Vec2 {
        self.shape.center()
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        self.shape.half_extents()
    }
}

/// Build the full brick grid, column by column
pub fn generate_bricks(config: &SimConfig) -> Vec<Brick> {
    let size = Vec2::new(config.brick_width, config.brick_height);
    let mut bricks = Vec::with_capacity(config.total_bricks() as usize);
    for column in 0..config.brick_columns {
        for row in 0..config.brick_rows {
            bricks.push(Brick {
                shape: Rect::new(config.brick_center(column, row), size),
                destroyed: false,
                column,
                row,
            });
        }
    }
    bricks
}

/// Complete simulation state, owned by the stepper
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks in creation order
    pub bricks: Vec<Brick>,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Completed rounds (bottom-wall exits)
    pub rounds: u32,
    rng: Pcg32,
}

impl GameState {
    pub fn new(config: SimConfig) -> Self {
        let arena = config.arena();
        let paddle = Paddle::new(
            Vec2::new(arena.x / 2.0, arena.y - config.paddle_floor_offset),
            Vec2::new(config.paddle_width, config.paddle_height),
        );
        let mut ball = Ball::new(paddle.center(), config.ball_radius);
        ball.pin_above(&paddle, config.serve_gap);

        Self {
            bricks: generate_bricks(&config),
            rng: Pcg32::seed_from_u64(config.seed),
            ball,
            paddle,
            score: 0,
            time_ticks: 0,
            rounds: 0,
            config,
        }
    }

    /// Bricks in a full grid
    pub fn total_bricks(&self) -> u32 {
        self.config.total_bricks()
    }

    pub fn live_bricks(&self) -> usize {
        self.bricks.len()
    }

    /// Launch the ball if it is waiting; the side is drawn from the seeded RNG
    pub fn launch_ball(&mut self) -> bool {
        if !self.ball.awaiting_launch() {
            return false;
        }
        let rightward = self.rng.random_bool(0.5);
        self.ball.launch(self.config.ball_speed, rightward);
        log::info!(
            "Ball launched {} at tick {}",
            if rightward { "up-right" } else { "up-left" },
            self.time_ticks
        );
        true
    }

    /// Score from brick count: bricks destroyed this round
    pub fn recompute_score(&mut self) {
        self.score = self.total_bricks().saturating_sub(self.bricks.len() as u32);
    }

    /// Start a fresh round: full grid, zero score, ball back on the paddle
    pub fn reset_round(&mut self) {
        self.bricks = generate_bricks(&self.config);
        self.score = 0;
        self.ball.return_to_paddle(&self.paddle, self.config.serve_gap);
    }

    /// Read-only snapshot for the presentation layer
    pub fn scene(&self) -> Scene {
        Scene::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_waiting_with_full_grid() {
        let state = GameState::new(SimConfig::default());
        assert!(state.ball.awaiting_launch());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.live_bricks(), 44);
        assert_eq!(state.score, 0);
        // Ball rests just above the paddle centre
        assert_eq!(state.ball.x(), state.paddle.x());
        assert!(state.ball.bottom() < state.paddle.top());
    }

    #[test]
    fn test_grid_creation_order_is_column_major() {
        let bricks = generate_bricks(&SimConfig::default());
        assert_eq!((bricks[0].column, bricks[0].row), (0, 0));
        assert_eq!((bricks[1].column, bricks[1].row), (0, 1));
        assert_eq!((bricks[4].column, bricks[4].row), (1, 0));
        assert!(bricks.iter().all(|b| !b.destroyed));
    }

    #[test]
    fn test_paddle_steer_prefers_left() {
        let mut paddle = Paddle::new(Vec2::new(400.0, 550.0), Vec2::new(60.0, 20.0));
        paddle.steer(true, true, 0.8, 800.0);
        assert_eq!(paddle.vel, -0.8);
    }

    #[test]
    fn test_paddle_stops_at_walls() {
        let mut paddle = Paddle::new(Vec2::new(30.0, 550.0), Vec2::new(60.0, 20.0));
        paddle.steer(true, false, 0.8, 800.0);
        assert_eq!(paddle.vel, 0.0);

        // At the left wall, left+right still moves right
        paddle.steer(true, true, 0.8, 800.0);
        assert_eq!(paddle.vel, 0.8);

        let mut paddle = Paddle::new(Vec2::new(769.5, 550.0), Vec2::new(60.0, 20.0));
        paddle.steer(false, true, 0.8, 800.0);
        paddle.integrate(1.0, 800.0);
        assert_eq!(paddle.right(), 800.0);
    }

    #[test]
    fn test_launch_only_from_waiting() {
        let mut state = GameState::new(SimConfig::default());
        assert!(state.launch_ball());
        assert_eq!(state.ball.state, BallState::InPlay);
        assert_eq!(state.ball.vel.y, -state.config.ball_speed);
        assert_eq!(state.ball.vel.x.abs(), state.config.ball_speed);

        let vel = state.ball.vel;
        assert!(!state.launch_ball());
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn test_launch_direction_follows_seed() {
        let launch = |seed| {
            let config = SimConfig {
                seed,
                ..Default::default()
            };
            let mut state = GameState::new(config);
            state.launch_ball();
            state.ball.vel
        };
        assert_eq!(launch(42), launch(42));
        // Across a handful of seeds both directions show up
        let sides: Vec<bool> = (0..16).map(|seed| launch(seed).x > 0.0).collect();
        assert!(sides.contains(&true));
        assert!(sides.contains(&false));
    }

    #[test]
    fn test_reset_round_restores_grid() {
        let mut state = GameState::new(SimConfig::default());
        let initial: Vec<Vec2> = state.bricks.iter().map(|b| b.shape.pos).collect();
        state.launch_ball();
        state.bricks.truncate(10);
        state.recompute_score();
        assert_eq!(state.score, 34);

        state.reset_round();
        let regenerated: Vec<Vec2> = state.bricks.iter().map(|b| b.shape.pos).collect();
        assert_eq!(initial, regenerated);
        assert_eq!(state.score, 0);
        assert!(state.ball.awaiting_launch());
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }
}
