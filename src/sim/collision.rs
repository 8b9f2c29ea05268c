//! Collision detection and response
//!
//! Every test is an AABB overlap; the ball is treated as its bounding box.
//! Responses never move shapes apart, they only set velocity components to
//! the fixed ball speed with the appropriate sign.

use glam::Vec2;

use super::geometry::Bounds;
use super::state::{Ball, Brick, Paddle};

/// True iff the two boxes intersect on both axes. Touching edges count.
#[inline]
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: Bounds + ?Sized,
    B: Bounds + ?Sized,
{
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}

/// Bounce the ball off the paddle.
///
/// The ball always leaves upward; the horizontal sign depends only on which
/// half of the paddle was struck (centre counts as the right half).
/// Returns whether a collision happened.
pub fn resolve_paddle_ball(paddle: &Paddle, ball: &mut Ball, speed: f32) -> bool {
    if !overlaps(paddle, ball) {
        return false;
    }
    ball.vel.y = -speed;
    ball.vel.x = if ball.x() < paddle.x() { -speed } else { speed };
    true
}

/// Overlap distances between a ball and a brick along each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Penetration {
    /// Ball entered through the brick's left side
    #[inline]
    pub fn from_left(&self) -> bool {
        self.left.abs() < self.right.abs()
    }

    /// Ball entered through the brick's top side
    #[inline]
    pub fn from_top(&self) -> bool {
        self.top.abs() < self.bottom.abs()
    }

    /// Smaller overlap along x and along y
    pub fn min_overlap(&self) -> Vec2 {
        Vec2::new(
            if self.from_left() { self.left } else { self.right },
            if self.from_top() { self.top } else { self.bottom },
        )
    }

    /// Strictly smaller x overlap. Ties and smaller y overlaps report false.
    pub fn horizontal_dominant(&self) -> bool {
        let min = self.min_overlap();
        min.x.abs() < min.y.abs()
    }
}

pub fn penetration<B: Bounds + ?Sized>(brick: &B, ball: &Ball) -> Penetration {
    Penetration {
        left: ball.right() - brick.left(),
        right: brick.right() - ball.left(),
        top: ball.bottom() - brick.top(),
        bottom: brick.bottom() - ball.top(),
    }
}

/// Destroy the brick if the ball touches it and pick a bounce direction.
///
/// Velocity only changes when the x overlap is strictly smaller than the y
/// overlap; in that case both components are set, pushing the ball back out
/// of the side and face it came through. Otherwise the ball keeps its
/// velocity. Returns whether the brick was destroyed.
pub fn resolve_brick_ball(brick: &mut Brick, ball: &mut Ball, speed: f32) -> bool {
    if !overlaps(brick, ball) {
        return false;
    }

    brick.destroyed = true;

    let pen = penetration(brick, ball);
    if pen.horizontal_dominant() {
        ball.vel.x = if pen.from_left() { -speed } else { speed };
        ball.vel.y = if pen.from_top() { -speed } else { speed };
    }

    log::debug!(
        "Brick ({}, {}) destroyed, min overlap {:?}, ball vel {:?}",
        brick.column,
        brick.row,
        pen.min_overlap(),
        ball.vel
    );
    true
}

/// Arena wall touched by the ball, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Left,
    Right,
    Top,
    /// Ball fell past the bottom edge
    Bottom,
}

/// First wall the ball penetrates, checked left, right, top, bottom
pub fn wall_contact(ball: &Ball, arena: Vec2) -> Option<WallContact> {
    if ball.left() < 0.0 {
        Some(WallContact::Left)
    } else if ball.right() > arena.x {
        Some(WallContact::Right)
    } else if ball.top() < 0.0 {
        Some(WallContact::Top)
    } else if ball.bottom() > arena.y {
        Some(WallContact::Bottom)
    } else {
        None
    }
}
