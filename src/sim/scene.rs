//! Read-only render snapshot

use glam::Vec2;
use serde::Serialize;

use super::geometry::Bounds;
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView {
    pub pos: Vec2,
    pub half_extents: Vec2,
}

impl RectView {
    fn of<B: Bounds + ?Sized>(shape: &B) -> Self {
        Self {
            pos: shape.center(),
            half_extents: shape.half_extents(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub arena: Vec2,
    pub ball: BallView,
    pub paddle: RectView,
    /// Live bricks in creation order
    pub bricks: Vec<RectView>,
    pub score: u32,
    pub awaiting_launch: bool,
}

impl Scene {
    pub fn capture(state: &GameState) -> Self {
        Self {
            arena: state.config.arena(),
            ball: BallView {
                pos: state.ball.center(),
                radius: state.ball.radius(),
            },
            paddle: RectView::of(&state.paddle),
            bricks: state.bricks.iter().map(RectView::of).collect(),
            score: state.score,
            awaiting_launch: state.ball.awaiting_launch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn test_capture_initial_scene() {
        let state = GameState::new(SimConfig::default());
        let scene = state.scene();
        assert_eq!(scene.arena, Vec2::new(800.0, 600.0));
        assert_eq!(scene.bricks.len(), 44);
        assert_eq!(scene.paddle.pos, Vec2::new(400.0, 550.0));
        assert_eq!(scene.paddle.half_extents, Vec2::new(30.0, 10.0));
        assert_eq!(scene.ball.radius, 10.0);
        assert_eq!(scene.score, 0);
        assert!(scene.awaiting_launch);
    }

    #[test]
    fn test_scene_serializes() {
        let scene = GameState::new(SimConfig::default()).scene();
        let json = serde_json::to_value(&scene).expect("scene serializes");
        assert_eq!(json["score"], 0);
        assert_eq!(json["bricks"].as_array().map(Vec::len), Some(44));
    }
}
