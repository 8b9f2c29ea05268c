//! Axis-aligned shapes shared by every entity
//!
//! Screen coordinates: x grows right, y grows down, so `top() < bottom()`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anything with an axis-aligned bounding box
pub trait Bounds {
    /// Centre position
    fn center(&self) -> Vec2;

    /// Half width and half height of the bounding box
    fn half_extents(&self) -> Vec2;

    #[inline]
    fn x(&self) -> f32 {
        self.center().x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.center().y
    }

    #[inline]
    fn left(&self) -> f32 {
        self.center().x - self.half_extents().x
    }

    #[inline]
    fn right(&self) -> f32 {
        self.center().x + self.half_extents().x
    }

    #[inline]
    fn top(&self) -> f32 {
        self.center().y - self.half_extents().y
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.center().y + self.half_extents().y
    }
}

/// A rectangle positioned by its centre. Size is fixed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    half: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            half: size / 2.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }
}

impl Bounds for Rect {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        self.half
    }
}

/// A circle positioned by its centre. Collision treats it as its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vec2,
    radius: f32,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Bounds for Circle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }
}
