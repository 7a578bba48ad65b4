//! Error types for scenario setup.
//!
//! The physics step never fails; only building a simulation from a
//! configuration can.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid JSON for a scenario.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Unrecognised preset name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Arena must have a positive, finite size.
    #[error("arena size must be positive, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    /// Friction must lie in [0, 1].
    #[error("friction must be in [0, 1], got {0}")]
    InvalidFriction(f32),

    /// Jerk must be finite and non-negative.
    #[error("jerk must be finite and non-negative, got {0}")]
    InvalidJerk(f32),

    /// Body radius must be positive and finite.
    #[error("body {index}: radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    /// Body mass must be non-negative and finite.
    #[error("body {index}: mass must be non-negative, got {mass}")]
    InvalidMass { index: usize, mass: f32 },

    /// Body elasticity must lie in [0, 1].
    #[error("body {index}: elasticity must be in [0, 1], got {elasticity}")]
    InvalidElasticity { index: usize, elasticity: f32 },

    /// Body position or velocity is not finite.
    #[error("body {index}: position and velocity must be finite")]
    NonFiniteState { index: usize },

    /// Controlled body index does not name a body.
    #[error("controlled body {index} out of range (have {count} bodies)")]
    ControlledOutOfRange { index: usize, count: usize },
}

impl ConfigError {
    /// Create an unknown preset error.
    #[must_use]
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset(name.into())
    }
}
