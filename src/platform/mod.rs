//! Platform abstraction layer
//!
//! Input collaborators that feed the simulation. Rendering lives outside
//! this crate and only reads `SimState`.

pub mod input;

pub use input::{Direction, KeyboardState};
