//! Velocity response for colliding disks and arena walls
//!
//! Two pairwise models are available. `Impulse` applies an impulse along the
//! contact normal sized by the pair's inverse masses and minimum restitution.
//! `Rotation` rotates both velocities into the line-of-centers frame, applies
//! the 1D collision formula there and rotates back. Both treat mass 0 as
//! immovable and give the same result for any pair.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::contact_normal;
use super::state::{Bounds, WallContacts};

/// Slack allowed when deciding whether a body touches a wall after correction
pub const WALL_SLOP: f32 = 1e-3;

/// Pairwise velocity resolution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseModel {
    #[default]
    Impulse,
    Rotation,
}

impl ResponseModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseModel::Impulse => "impulse",
            ResponseModel::Rotation => "rotation",
        }
    }
}

/// Separating velocity along the normal from `b` to `a` (negative = approaching)
#[inline]
pub fn separating_velocity(a: &Body, b: &Body) -> f32 {
    (a.velocity - b.velocity).dot(contact_normal(a, b))
}

/// Impulse response for approaching pairs
///
/// Pairs that are already separating keep their velocities.
pub fn resolve_collision(a: &mut Body, b: &mut Body) {
    apply_impulse(a, b, true);
}

/// Impulse response applied regardless of approach direction
pub fn resolve_collision_ungated(a: &mut Body, b: &mut Body) {
    apply_impulse(a, b, false);
}

fn apply_impulse(a: &mut Body, b: &mut Body, approach_guard: bool) {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return;
    }

    let normal = contact_normal(a, b);
    let separating = (a.velocity - b.velocity).dot(normal);
    if approach_guard && separating >= 0.0 {
        return;
    }

    let restitution = a.elasticity.min(b.elasticity);
    let new_separating = -separating * restitution;
    let impulse = normal * ((new_separating - separating) / inv_sum);

    a.velocity += impulse * inv_a;
    b.velocity -= impulse * inv_b;
}

/// Line-of-centers frame response
///
/// `approach_guard` has the same meaning as for the impulse model.
pub fn resolve_collision_rotated(a: &mut Body, b: &mut Body, approach_guard: bool) {
    if a.is_immovable() && b.is_immovable() {
        return;
    }

    // Frame where +x points from `a` to `b`
    let diff = b.position - a.position;
    let angle = if diff == Vec2::ZERO {
        // Coincident: line of centers is the +X fallback, pointing b -> a
        std::f32::consts::PI
    } else {
        diff.y.atan2(diff.x)
    };
    let to_frame = Vec2::from_angle(-angle);
    let from_frame = Vec2::from_angle(angle);

    let u1 = to_frame.rotate(a.velocity);
    let u2 = to_frame.rotate(b.velocity);

    // In this frame `a` approaches `b` when u1.x > u2.x
    if approach_guard && u1.x - u2.x <= 0.0 {
        return;
    }

    let e = a.elasticity.min(b.elasticity);
    let (v1x, v2x) = if a.is_immovable() {
        (u1.x, u1.x + e * (u1.x - u2.x))
    } else if b.is_immovable() {
        (u2.x + e * (u2.x - u1.x), u2.x)
    } else {
        let (m1, m2) = (a.mass, b.mass);
        let total = m1 + m2;
        let p = m1 * u1.x + m2 * u2.x;
        (
            (p + m2 * e * (u2.x - u1.x)) / total,
            (p + m1 * e * (u1.x - u2.x)) / total,
        )
    };

    if !a.is_immovable() {
        a.velocity = from_frame.rotate(Vec2::new(v1x, u1.y));
    }
    if !b.is_immovable() {
        b.velocity = from_frame.rotate(Vec2::new(v2x, u2.y));
    }
}

/// Resolve a pair with the chosen model
pub fn resolve_pair(model: ResponseModel, a: &mut Body, b: &mut Body, approach_guard: bool) {
    match model {
        ResponseModel::Impulse => apply_impulse(a, b, approach_guard),
        ResponseModel::Rotation => resolve_collision_rotated(a, b, approach_guard),
    }
}

/// Reflect velocity off the walls in `walls`
///
/// Walls are rigid and perfectly elastic. Only the component heading into a
/// touched wall is reversed.
pub fn reflect_off_walls(body: &mut Body, walls: WallContacts) {
    if walls.left {
        body.velocity.x = body.velocity.x.abs();
    }
    if walls.right {
        body.velocity.x = -body.velocity.x.abs();
    }
    if walls.top {
        body.velocity.y = body.velocity.y.abs();
    }
    if walls.bottom {
        body.velocity.y = -body.velocity.y.abs();
    }
}

/// Reflect velocity for every wall the body touches
pub fn resolve_boundary_collision(body: &mut Body, bounds: &Bounds) -> WallContacts {
    let walls = bounds.wall_contacts(body, WALL_SLOP);
    reflect_off_walls(body, walls);
    walls
}
