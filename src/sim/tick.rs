//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. The stage order below is
//! fixed: paddle and brick resolution read positions already advanced this
//! tick.

use glam::Vec2;

use super::collision::{WallContact, resolve_brick_ball, resolve_paddle_ball, wall_contact};
use super::state::{BallState, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub move_left: bool,
    /// Move paddle right (held)
    pub move_right: bool,
    /// Launch ball (one-shot)
    pub launch: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub launched: bool,
    pub bricks_destroyed: u32,
    /// Ball left through the bottom wall and the round restarted
    pub round_reset: bool,
}

/// Advance the game state by one fixed timestep of `dt` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    let speed = state.config.ball_speed;
    let arena = state.config.arena();

    if input.launch {
        outcome.launched = state.launch_ball();
    }

    // Ball motion
    state.ball.shape.pos += state.ball.vel * dt;

    // Walls: first match only
    match state.ball.state {
        BallState::AwaitingLaunch => state.ball.vel = Vec2::ZERO,
        BallState::InPlay => match wall_contact(&state.ball, arena) {
            Some(WallContact::Left) => state.ball.vel.x = speed,
            Some(WallContact::Right) => state.ball.vel.x = -speed,
            Some(WallContact::Top) => state.ball.vel.y = speed,
            Some(WallContact::Bottom) => {
                state.ball.state = BallState::AwaitingLaunch;
                state.ball.vel = Vec2::ZERO;
                outcome.round_reset = true;
            }
            None => {}
        },
    }

    // Paddle motion
    state.paddle.steer(
        input.move_left,
        input.move_right,
        state.config.paddle_speed,
        arena.x,
    );
    state.paddle.integrate(dt, arena.x);

    // Collisions
    resolve_paddle_ball(&state.paddle, &mut state.ball, speed);
    for brick in state.bricks.iter_mut() {
        if resolve_brick_ball(brick, &mut state.ball, speed) {
            outcome.bricks_destroyed += 1;
        }
    }

    // Cull and score
    state.bricks.retain(|b| !b.destroyed);
    state.recompute_score();

    if outcome.round_reset {
        state.rounds += 1;
        log::info!(
            "Ball lost at tick {}, round {} ended with score {}",
            state.time_ticks,
            state.rounds,
            state.score
        );
        state.reset_round();
    } else if state.ball.awaiting_launch() {
        state.ball.pin_above(&state.paddle, state.config.serve_gap);
    }

    log::trace!(
        "Tick {}: ball {:?} vel {:?}, {} bricks",
        state.time_ticks,
        state.ball.shape.pos,
        state.ball.vel,
        state.bricks.len()
    );

    outcome
}
