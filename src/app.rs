//! Render loop
//!
//! Each iteration polls input, feeds the previous iteration's frame time to
//! the stepper, draws the resulting scene and refreshes the title.

use crate::config::{Config, ConfigError, DisplayConfig};
use crate::platform::time::frame_budget;
use crate::platform::{FrameStats, FrameTimer, InputCollector, Presenter};
use crate::renderer::{FontData, ScoreLabel, colors};
use crate::sim::{FrameOutcome, Stepper};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub rounds: u32,
    pub bricks_destroyed: u64,
    pub final_score: u32,
}

impl RunSummary {
    fn record(&mut self, outcome: &FrameOutcome) {
        self.frames += 1;
        self.steps += outcome.steps;
        self.rounds += outcome.round_resets;
        self.bricks_destroyed += u64::from(outcome.bricks_destroyed);
    }
}

/// Game instance tying a presenter to the simulation
pub struct App<P: Presenter> {
    presenter: P,
    stepper: Stepper,
    input: InputCollector,
    display: DisplayConfig,
    font: Option<FontData>,
    last_frame_ms: f32,
    stats: FrameStats,
}

impl<P: Presenter> App<P> {
    /// Build the game; the font is loaded from `display.font_path` if present
    pub fn new(config: Config, presenter: P) -> Result<Self, ConfigError> {
        let font = FontData::load(&config.display.font_path);
        Self::with_font(config, presenter, font)
    }

    pub fn with_font(
        config: Config,
        presenter: P,
        font: Option<FontData>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            presenter,
            stepper: Stepper::new(config.sim)?,
            input: InputCollector::new(),
            display: config.display,
            font,
            last_frame_ms: 0.0,
            stats: FrameStats::default(),
        })
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Input, simulation, clear and draw for one iteration
    pub fn frame(&mut self, elapsed_ms: f32) -> FrameOutcome {
        self.input.extend(self.presenter.poll_events());
        let snapshot = self.input.snapshot();

        let outcome = self.stepper.advance(elapsed_ms, &snapshot);

        let scene = self.stepper.scene();
        let label = ScoreLabel::new(
            scene.score,
            &self.display,
            scene.arena.x,
            self.font.as_ref(),
        );
        self.presenter.clear(colors::BACKGROUND);
        self.presenter.draw(&scene, &label);

        outcome
    }

    /// Record how long the last iteration took and publish diagnostics
    pub fn finish_frame(&mut self, frame_ms: f32) {
        self.last_frame_ms = frame_ms;
        self.stats = FrameStats::from_frame_ms(frame_ms);
        self.presenter.set_title(&self.stats.title());
    }

    /// Run until the presenter reports a close or escape
    pub fn run(mut self) -> (RunSummary, P) {
        log::info!("{} running", self.display.window_title);

        let budget = frame_budget(self.display.frame_rate_limit);
        let mut timer = FrameTimer::new();
        let mut summary = RunSummary::default();

        loop {
            timer.restart();
            let outcome = self.frame(self.last_frame_ms);
            summary.record(&outcome);

            if let Some(budget) = budget {
                let spent = timer.elapsed();
                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
            self.finish_frame(timer.elapsed_ms());

            if outcome.quit {
                break;
            }
        }

        summary.final_score = self.stepper.state().score;
        log::info!(
            "Stopped after {} frames, {} steps, {} rounds",
            summary.frames,
            summary.steps,
            summary.rounds
        );
        (summary, self.presenter)
    }
}
