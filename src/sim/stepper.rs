//! Fixed-timestep accumulator
//!
//! Frame time is fed in once per render-loop iteration and discharged in
//! whole steps, so the sequence of ticks depends only on the input and the
//! total elapsed time, never on how that time was split into frames.

use super::scene::Scene;
use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::config::{ConfigError, SimConfig};

/// Input state sampled once per render-loop iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Level-triggered
    pub move_left_held: bool,
    /// Level-triggered
    pub move_right_held: bool,
    /// Edge-triggered; latched until a step consumes it
    pub launch_pressed: bool,
    /// Edge-triggered; the loop stops after this iteration
    pub quit_requested: bool,
}

/// Summary of one `advance` call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameOutcome {
    pub steps: u64,
    pub bricks_destroyed: u32,
    pub round_resets: u32,
    pub launched: bool,
    pub quit: bool,
    /// Backlog discarded by the substep cap, in milliseconds
    pub dropped_ms: f32,
}

/// Owns the game state and its timing
#[derive(Debug, Clone)]
pub struct Stepper {
    state: GameState,
    accumulator_ms: f32,
    last_frame_ms: f32,
    pending_launch: bool,
    total_steps: u64,
}

impl Stepper {
    /// Rejects configs that fail [`SimConfig::validate`]
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_state(GameState::new(config)))
    }

    pub fn from_state(state: GameState) -> Result<Self, ConfigError> {
        state.config.validate()?;
        Ok(Self::from_valid_state(state))
    }

    fn from_valid_state(state: GameState) -> Self {
        Self {
            state,
            accumulator_ms: 0.0,
            last_frame_ms: 0.0,
            pending_launch: false,
            total_steps: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scene(&self) -> Scene {
        self.state.scene()
    }

    /// Unconsumed time, always below one step after `advance`
    pub fn accumulator_ms(&self) -> f32 {
        self.accumulator_ms
    }

    pub fn last_frame_ms(&self) -> f32 {
        self.last_frame_ms
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Add `elapsed_ms` of wall-clock time and run every whole step it covers
    pub fn advance(&mut self, elapsed_ms: f32, input: &InputSnapshot) -> FrameOutcome {
        let mut outcome = FrameOutcome {
            quit: input.quit_requested,
            ..Default::default()
        };

        if input.launch_pressed {
            self.pending_launch = true;
        }

        // Negative or non-finite frame times carry no simulation time
        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        self.last_frame_ms = elapsed_ms;
        self.accumulator_ms += elapsed_ms;

        let step = self.state.config.step_ms;
        let mut due = whole_steps(self.accumulator_ms, step);
        self.accumulator_ms %= step;

        let cap = self.state.config.max_substeps.map(u64::from);
        if let Some(max) = cap.filter(|&max| due > max) {
            let backlog = (due - max) as f32 * step;
            outcome.dropped_ms = backlog;
            log::warn!(
                "Substep cap of {} reached, dropping {:.2} ms of backlog",
                max,
                backlog
            );
            due = max;
        }

        for _ in 0..due {
            let tick_input = TickInput {
                move_left: input.move_left_held,
                move_right: input.move_right_held,
                launch: self.pending_launch,
            };
            let result = tick(&mut self.state, &tick_input, step);
            self.pending_launch = false;

            outcome.bricks_destroyed += result.bricks_destroyed;
            outcome.launched |= result.launched;
            if result.round_reset {
                outcome.round_resets += 1;
            }
        }
        outcome.steps = due;
        self.total_steps += due;

        log::debug!(
            "Frame {:.3} ms: {} steps, {:.3} ms carried",
            elapsed_ms,
            outcome.steps,
            self.accumulator_ms
        );

        outcome
    }
}

/// Number of whole steps held in `accumulator_ms`.
///
/// Counted in one division. Subtracting one step at a time stalls once the
/// accumulator outgrows f32 precision (about 2^24 ms for a 1 ms step).
fn whole_steps(accumulator_ms: f32, step_ms: f32) -> u64 {
    let whole = accumulator_ms - accumulator_ms % step_ms;
    (whole / step_ms).round() as u64
}
