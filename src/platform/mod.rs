//! Platform abstraction layer
//!
//! The boundary between the simulation and whatever owns the window:
//! - Input events and the per-frame input snapshot
//! - Frame timing and the diagnostic title
//! - The [`Presenter`] trait a windowing backend implements

pub mod input;
pub mod time;

pub use input::{InputCollector, InputEvent, Key};
pub use time::{FrameStats, FrameTimer};

use crate::renderer::hud::ScoreLabel;
use crate::sim::Scene;

/// A display surface plus its event source.
///
/// Implementations own the window, fonts and draw calls. They only ever see
/// finished simulation snapshots.
pub trait Presenter {
    /// Drain the events that arrived since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Fill the surface before drawing a frame
    fn clear(&mut self, color: [f32; 4]);

    /// Present one frame
    fn draw(&mut self, scene: &Scene, score: &ScoreLabel);

    /// Update the window title with frame diagnostics
    fn set_title(&mut self, title: &str);
}
