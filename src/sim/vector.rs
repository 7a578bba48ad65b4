//! 2D vector helpers on top of `glam::Vec2`
//!
//! glam already provides add/sub/scale/dot/length. This module adds the few
//! operations the resolvers need that glam spells differently, plus the
//! `Axis` selector used by boundary checks and control input.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space 2D vector (value type, `Copy`)
pub type Vector2 = Vec2;

/// Direction used when two centers coincide and no line of centers exists
pub const COINCIDENT_FALLBACK: Vector2 = Vec2::X;

/// One of the two world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

/// Extra vector operations used by the simulation
pub trait VectorExt: Sized {
    /// Rotate counter-clockwise by `theta` radians
    fn rotated(self, theta: f32) -> Self;

    /// Unit vector in the same direction, or `fallback` for a zero/non-finite length
    fn unit_or(self, fallback: Self) -> Self;

    fn component(self, axis: Axis) -> f32;

    fn set_component(&mut self, axis: Axis, value: f32);
}

impl VectorExt for Vec2 {
    #[inline]
    fn rotated(self, theta: f32) -> Self {
        Vec2::from_angle(theta).rotate(self)
    }

    #[inline]
    fn unit_or(self, fallback: Self) -> Self {
        self.normalize_or(fallback)
    }

    #[inline]
    fn component(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    fn set_component(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }
}
