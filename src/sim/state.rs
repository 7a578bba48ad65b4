//! Arena bounds and the simulation context
//!
//! `SimState` owns every body for the run. Nothing outside a tick mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::tick::{ControlInput, StepParams};

/// Axis-aligned arena rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(
            Vec2::ZERO,
            crate::consts::ARENA_WIDTH,
            crate::consts::ARENA_HEIGHT,
        )
    }
}

impl Bounds {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height) * 0.5
    }

    /// Walls the body's disk touches or crosses, widened by `slop`
    pub fn wall_contacts(&self, body: &Body, slop: f32) -> WallContacts {
        WallContacts {
            left: body.left() <= self.left() + slop,
            right: body.right() >= self.right() - slop,
            top: body.top() <= self.top() + slop,
            bottom: body.bottom() >= self.bottom() - slop,
        }
    }

    /// True if the disk lies fully inside without touching any wall
    pub fn contains(&self, body: &Body) -> bool {
        !self.wall_contacts(body, 0.0).any()
    }
}

/// Which arena walls a body is in contact with (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.top as u32 + self.bottom as u32
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Bodies in stable id order
    pub bodies: Vec<Body>,
    pub bounds: Bounds,
    pub params: StepParams,
    /// Index of the body driven by control input (others are passive)
    pub controlled: Option<usize>,
    /// Input staged for the next tick
    #[serde(skip)]
    pub input: ControlInput,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    pub fn new(bodies: Vec<Body>, bounds: Bounds, params: StepParams) -> Self {
        let controlled = if bodies.is_empty() { None } else { Some(0) };
        Self {
            bodies,
            bounds,
            params,
            controlled,
            input: ControlInput::default(),
            time_ticks: 0,
        }
    }

    pub fn with_controlled(mut self, controlled: Option<usize>) -> Self {
        self.controlled = controlled;
        self
    }

    /// Stage control input to be read at the start of the next tick
    pub fn stage_input(&mut self, input: ControlInput) {
        self.input = input;
    }

    pub fn controlled_body(&self) -> Option<&Body> {
        self.controlled.and_then(|i| self.bodies.get(i))
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Ensure bodies are sorted by id for deterministic pair order
    pub fn normalize_order(&mut self) {
        let controlled_id = self.controlled_body().map(|b| b.id);
        self.bodies.sort_by_key(|b| b.id);
        if let Some(id) = controlled_id {
            self.controlled = self.bodies.iter().position(|b| b.id == id);
        }
    }
}
