//! Scenario configuration
//!
//! A scenario is an arena, step parameters and an initial body layout. It can
//! come from a named preset (one per demo program), a seeded random scatter, or
//! a JSON file.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};
use crate::sim::{Body, Bounds, ResponseModel, SimState, StepParams};

/// Demo scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Single steerable circle, no drag
    Movement,
    /// Large and small circle on one line, lossless
    Elastic1d,
    /// Same pair with drag
    Friction1d,
    /// Crowd of circles, frame-rotation response
    ElasticMultiple,
    /// Crowd of circles, mass-weighted impulse response
    #[default]
    Impulse,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Movement,
        Preset::Elastic1d,
        Preset::Friction1d,
        Preset::ElasticMultiple,
        Preset::Impulse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Movement => "movement",
            Preset::Elastic1d => "elastic-1d",
            Preset::Friction1d => "friction-1d",
            Preset::ElasticMultiple => "elastic-multiple",
            Preset::Impulse => "impulse",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "movement" => Some(Preset::Movement),
            "elastic-1d" | "elastic1d" => Some(Preset::Elastic1d),
            "friction-1d" | "friction1d" => Some(Preset::Friction1d),
            "elastic-multiple" | "multiple" => Some(Preset::ElasticMultiple),
            "impulse" => Some(Preset::Impulse),
            _ => None,
        }
    }
}

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub mass: f32,
    #[serde(default = "default_elasticity")]
    pub elasticity: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
}

fn default_elasticity() -> f32 {
    1.0
}

impl BodyConfig {
    pub fn new(x: f32, y: f32, radius: f32, mass: f32) -> Self {
        Self {
            x,
            y,
            radius,
            mass,
            elasticity: 1.0,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn to_body(&self, id: u32) -> Body {
        Body::new(id, Vec2::new(self.x, self.y), self.radius, self.mass)
            .with_elasticity(self.elasticity)
            .with_velocity(Vec2::new(self.vx, self.vy))
    }
}

/// Full scenario description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub arena: Bounds,
    #[serde(default = "default_jerk")]
    pub jerk: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default)]
    pub response: ResponseModel,
    #[serde(default = "default_approach_guard")]
    pub approach_guard: bool,
    /// Index into `bodies` of the steerable body
    #[serde(default = "default_controlled")]
    pub controlled: Option<usize>,
    pub bodies: Vec<BodyConfig>,
}

fn default_jerk() -> f32 {
    JERK
}

fn default_friction() -> f32 {
    FRICTION
}

fn default_approach_guard() -> bool {
    true
}

fn default_controlled() -> Option<usize> {
    Some(0)
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl SimConfig {
    /// Build the layout of a demo program
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self {
            arena: Bounds::default(),
            jerk: JERK,
            friction: FRICTION,
            response: ResponseModel::Impulse,
            approach_guard: true,
            controlled: Some(0),
            bodies: Vec::new(),
        };

        match preset {
            Preset::Movement => {
                config.friction = 0.0;
                config.bodies = vec![BodyConfig::new(400.0, 400.0, LEADER_RADIUS, LEADER_RADIUS)];
            }
            Preset::Elastic1d | Preset::Friction1d => {
                if preset == Preset::Elastic1d {
                    config.friction = 0.0;
                }
                config.response = ResponseModel::Rotation;
                config.bodies = vec![
                    BodyConfig::new(200.0, 400.0, 80.0, 80.0),
                    BodyConfig::new(400.0, 400.0, CROWD_RADIUS, CROWD_RADIUS),
                ];
            }
            Preset::ElasticMultiple | Preset::Impulse => {
                if preset == Preset::ElasticMultiple {
                    config.response = ResponseModel::Rotation;
                }
                config.bodies = crowd_layout();
            }
        }

        config
    }

    /// Reproducible random layout of `count` non-overlapping bodies
    ///
    /// Placements that keep colliding with earlier bodies are dropped, so the
    /// result may hold fewer than `count` bodies in a crowded arena.
    pub fn scatter(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let arena = Bounds::default();
        let mut bodies: Vec<BodyConfig> = Vec::with_capacity(count);

        for n in 0..count {
            let mut placed = false;
            for _ in 0..SCATTER_ATTEMPTS {
                let radius = rng.random_range(SCATTER_MIN_RADIUS..SCATTER_MAX_RADIUS);
                let x = rng.random_range(arena.left() + radius..arena.right() - radius);
                let y = rng.random_range(arena.top() + radius..arena.bottom() - radius);

                let overlaps = bodies.iter().any(|b| {
                    Vec2::new(b.x, b.y).distance(Vec2::new(x, y)) <= b.radius + radius
                });
                if overlaps {
                    continue;
                }

                let mut body = BodyConfig::new(x, y, radius, radius);
                body.vx = rng.random_range(-SCATTER_MAX_SPEED..SCATTER_MAX_SPEED);
                body.vy = rng.random_range(-SCATTER_MAX_SPEED..SCATTER_MAX_SPEED);
                bodies.push(body);
                placed = true;
                break;
            }
            if !placed {
                log::warn!("scatter: no room for body {} after {} attempts", n, SCATTER_ATTEMPTS);
            }
        }

        let controlled = if bodies.is_empty() { None } else { Some(0) };
        Self {
            arena,
            controlled,
            bodies,
            ..Self::from_preset(Preset::Impulse)
        }
    }

    /// Parse and validate a JSON scenario
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON scenario file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded scenario from {} ({} bodies)", path.display(), config.bodies.len());
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn params(&self) -> StepParams {
        StepParams {
            jerk: self.jerk,
            friction: self.friction,
            response: self.response,
            approach_guard: self.approach_guard,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let (width, height) = (self.arena.width, self.arena.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            || !self.arena.origin.is_finite()
        {
            return Err(ConfigError::InvalidArena { width, height });
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.jerk.is_finite() && self.jerk >= 0.0) {
            return Err(ConfigError::InvalidJerk(self.jerk));
        }

        for (index, body) in self.bodies.iter().enumerate() {
            if !(body.radius.is_finite() && body.radius > 0.0) {
                return Err(ConfigError::InvalidRadius {
                    index,
                    radius: body.radius,
                });
            }
            if !(body.mass.is_finite() && body.mass >= 0.0) {
                return Err(ConfigError::InvalidMass {
                    index,
                    mass: body.mass,
                });
            }
            if !(0.0..=1.0).contains(&body.elasticity) {
                return Err(ConfigError::InvalidElasticity {
                    index,
                    elasticity: body.elasticity,
                });
            }
            if ![body.x, body.y, body.vx, body.vy].iter().all(|v| v.is_finite()) {
                return Err(ConfigError::NonFiniteState { index });
            }
        }

        if let Some(index) = self.controlled {
            if index >= self.bodies.len() {
                return Err(ConfigError::ControlledOutOfRange {
                    index,
                    count: self.bodies.len(),
                });
            }
        }

        Ok(())
    }
}

impl SimState {
    /// Validate `config` and build the simulation context (body ids start at 1)
    pub fn from_config(config: &SimConfig) -> ConfigResult<Self> {
        config.validate()?;

        let bodies = config
            .bodies
            .iter()
            .zip(1u32..)
            .map(|(b, id)| b.to_body(id))
            .collect();

        log::info!(
            "Simulation ready: {} bodies, {}x{} arena, {} response",
            config.bodies.len(),
            config.arena.width,
            config.arena.height,
            config.response.as_str()
        );

        Ok(SimState::new(bodies, config.arena, config.params()).with_controlled(config.controlled))
    }
}

/// One large leader in the middle surrounded by a ring of diagonals and axes
fn crowd_layout() -> Vec<BodyConfig> {
    const CROWD: [(f32, f32); 24] = [
        (160.0, 160.0),
        (240.0, 240.0),
        (320.0, 320.0),
        (480.0, 480.0),
        (560.0, 560.0),
        (640.0, 640.0),
        (640.0, 160.0),
        (560.0, 240.0),
        (480.0, 320.0),
        (320.0, 480.0),
        (240.0, 560.0),
        (160.0, 640.0),
        (287.0, 400.0),
        (513.0, 400.0),
        (400.0, 287.0),
        (400.0, 513.0),
        (174.0, 400.0),
        (626.0, 400.0),
        (400.0, 174.0),
        (400.0, 626.0),
        (61.0, 400.0),
        (739.0, 400.0),
        (400.0, 61.0),
        (400.0, 739.0),
    ];

    std::iter::once(BodyConfig::new(400.0, 400.0, LEADER_RADIUS, LEADER_RADIUS))
        .chain(
            CROWD
                .iter()
                .map(|&(x, y)| BodyConfig::new(x, y, CROWD_RADIUS, CROWD_RADIUS)),
        )
        .collect()
}
