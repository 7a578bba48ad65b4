//! Circle Sim - deterministic 2D circle-collision simulator
//!
//! Core modules:
//! - `sim`: Fixed-tick physics (integration, overlap detection, penetration
//!   and impulse resolution, arena walls)
//! - `platform`: Input collaborators (keyboard mapping)
//! - `config`: Scenario presets and JSON loading
//! - `error`: Setup errors

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::{BodyConfig, Preset, SimConfig};
pub use error::{ConfigError, ConfigResult};
pub use sim::{Body, Bounds, ControlInput, SimState, StepParams, step, tick};

/// Simulation constants
pub mod consts {
    /// Acceleration magnitude of a driven body (per tick)
    pub const JERK: f32 = 1.0;
    /// Fraction of velocity lost per tick
    pub const FRICTION: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Demo layout sizes (mass equals radius)
    pub const LEADER_RADIUS: f32 = 48.0;
    pub const CROWD_RADIUS: f32 = 24.0;

    /// Random scatter layout
    pub const SCATTER_MIN_RADIUS: f32 = 12.0;
    pub const SCATTER_MAX_RADIUS: f32 = 36.0;
    pub const SCATTER_MAX_SPEED: f32 = 4.0;
    pub const SCATTER_ATTEMPTS: u32 = 64;
}
