//! Circular rigid body and its per-tick integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::{Axis, VectorExt};

/// Inverse mass with mass 0 meaning immovable
#[inline]
pub fn inverse_mass(mass: f32) -> f32 {
    if mass == 0.0 { 0.0 } else { 1.0 / mass }
}

/// A point-mass disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    /// Center of the disk
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    /// Control request for this tick, rescaled to the jerk magnitude on integration
    pub acceleration: Vec2,
    pub radius: f32,
    /// 0 = infinite mass
    pub mass: f32,
    /// Restitution in [0, 1]
    pub elasticity: f32,
}

impl Body {
    pub fn new(id: u32, position: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            mass,
            elasticity: 1.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        inverse_mass(self.mass)
    }

    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.mass == 0.0
    }

    /// Set one axis of the acceleration request
    pub fn accelerate(&mut self, axis: Axis, amount: f32) {
        self.acceleration.set_component(axis, amount);
    }

    /// Advance one tick (semi-implicit Euler)
    ///
    /// acceleration → velocity → friction decay → position. The stored
    /// acceleration becomes its unit direction times `jerk`, so any active
    /// direction has the same magnitude regardless of how many axes are held.
    pub fn integrate(&mut self, jerk: f32, friction: f32) {
        self.acceleration = self.acceleration.normalize_or_zero() * jerk;
        self.velocity += self.acceleration;
        self.velocity *= 1.0 - friction;
        self.position += self.velocity;
    }

    /// Linear momentum (immovable bodies carry none)
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.radius
    }
}
