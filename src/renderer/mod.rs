//! CPU-side rendering helpers
//!
//! Turns a [`crate::sim::Scene`] into colored triangles and HUD text that a
//! GPU backend can upload as-is.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::{FontData, ScoreLabel};
pub use shapes::scene_mesh;
pub use vertex::{Vertex, colors};
