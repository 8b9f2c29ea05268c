//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{RectView, Scene};

/// Triangle fan segments used for the ball
pub const BALL_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Append two triangles covering an axis-aligned rectangle
pub fn push_rect(vertices: &mut Vec<Vertex>, center: Vec2, half: Vec2, color: [f32; 4]) {
    let min = center - half;
    let max = center + half;

    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));

    vertices.push(Vertex::new(min.x, max.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
}

fn push_view(vertices: &mut Vec<Vertex>, view: &RectView, color: [f32; 4]) {
    push_rect(vertices, view.pos, view.half_extents, color);
}

/// Tessellate a whole frame: ball, paddle, then bricks in creation order
pub fn scene_mesh(scene: &Scene) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity((BALL_SEGMENTS * 3) as usize + 6 * (scene.bricks.len() + 1));

    vertices.extend(circle(
        scene.ball.pos,
        scene.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));
    push_view(&mut vertices, &scene.paddle, colors::PADDLE);
    for brick in &scene.bricks {
        push_view(&mut vertices, brick, colors::BRICK);
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::GameState;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 5.0, colors::BALL, 8);
        assert_eq!(verts.len(), 24);
        // Every outer vertex sits on the radius
        for v in verts.iter().skip(1).step_by(3) {
            let r = Vec2::from(v.position).length();
            assert!((r - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_covers_bounds() {
        let mut verts = Vec::new();
        push_rect(&mut verts, Vec2::new(10.0, 20.0), Vec2::new(3.0, 2.0), colors::BRICK);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 7.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 13.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 18.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 22.0);
    }

    #[test]
    fn test_scene_mesh_layout() {
        let scene = GameState::new(SimConfig::default()).scene();
        let mesh = scene_mesh(&scene);
        let ball = (BALL_SEGMENTS * 3) as usize;
        assert_eq!(mesh.len(), ball + 6 + 44 * 6);
        assert_eq!(mesh[0].color, colors::BALL);
        assert_eq!(mesh[ball].color, colors::PADDLE);
        assert_eq!(mesh[ball + 6].color, colors::BRICK);
    }
}
