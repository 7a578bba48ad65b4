//! Positional correction for overlapping disks and arena walls

use glam::Vec2;

use super::body::Body;
use super::collision::contact;
use super::state::{Bounds, WallContacts};

/// Push bodies apart along the line of centers, weighted by inverse mass
///
/// Each body moves by its share `depth * inv_mass / (inv_a + inv_b)`, so an
/// immovable body stays put and its partner takes the whole correction.
/// Does nothing if the bodies are not touching or both are immovable.
pub fn resolve_penetration(a: &mut Body, b: &mut Body) {
    let Some(hit) = contact(a, b) else {
        return;
    };

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return;
    }

    let resolution = hit.normal * (hit.depth / inv_sum);
    a.position += resolution * inv_a;
    b.position -= resolution * inv_b;
}

/// Translate a body by the full `depth` along `normal`
///
/// Used against walls, which behave as infinite mass.
#[inline]
pub fn push_out(body: &mut Body, normal: Vec2, depth: f32) {
    body.position += normal * depth;
}

/// Clamp a body back inside the arena
///
/// Each edge is checked independently, so a body wedged in a corner is
/// corrected on both axes. Returns the walls the body was touching before
/// correction.
pub fn resolve_boundary_penetration(body: &mut Body, bounds: &Bounds) -> WallContacts {
    let walls = bounds.wall_contacts(body, 0.0);

    if walls.left {
        push_out(body, Vec2::X, bounds.left() - body.left());
    }
    if walls.right {
        push_out(body, Vec2::NEG_X, body.right() - bounds.right());
    }
    if walls.top {
        push_out(body, Vec2::Y, bounds.top() - body.top());
    }
    if walls.bottom {
        push_out(body, Vec2::NEG_Y, body.bottom() - bounds.bottom());
    }

    walls
}
