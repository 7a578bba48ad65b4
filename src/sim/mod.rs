//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod penetration;
pub mod response;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{Body, inverse_mass};
pub use collision::{Contact, contact, contact_normal, is_colliding};
pub use penetration::{push_out, resolve_boundary_penetration, resolve_penetration};
pub use response::{
    ResponseModel, reflect_off_walls, resolve_boundary_collision, resolve_collision,
    resolve_collision_rotated, resolve_collision_ungated, resolve_pair, separating_velocity,
};
pub use state::{Bounds, SimState, WallContacts};
pub use tick::{ControlInput, StepParams, StepStats, apply_control, step, tick};
pub use vector::{Axis, Vector2, VectorExt};
