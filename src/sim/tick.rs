//! Fixed timestep simulation tick
//!
//! One call advances every body by one tick:
//! control → integration → walls → pairwise overlap → penetration → velocity.
//! Pairs are visited in index order (i < j) so a given input sequence always
//! replays the same floating-point operations.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::is_colliding;
use super::penetration::{resolve_boundary_penetration, resolve_penetration};
use super::response::{ResponseModel, reflect_off_walls, resolve_pair};
use super::state::{Bounds, SimState};
use super::vector::Axis;
use crate::consts::{FRICTION, JERK};

/// Directional control flags for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ControlInput {
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Requested acceleration on `axis` (down and right win ties)
    pub fn axis_request(&self, axis: Axis, jerk: f32) -> f32 {
        let (negative, positive) = match axis {
            Axis::X => (self.left, self.right),
            Axis::Y => (self.up, self.down),
        };
        if positive {
            jerk
        } else if negative {
            -jerk
        } else {
            0.0
        }
    }
}

/// Per-tick physics parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    /// Acceleration magnitude applied to a driven body
    pub jerk: f32,
    /// Fraction of velocity removed each tick
    pub friction: f32,
    #[serde(default)]
    pub response: ResponseModel,
    /// Skip the velocity response for pairs already moving apart
    #[serde(default = "default_approach_guard")]
    pub approach_guard: bool,
}

fn default_approach_guard() -> bool {
    true
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            jerk: JERK,
            friction: FRICTION,
            response: ResponseModel::Impulse,
            approach_guard: true,
        }
    }
}

/// Contacts seen during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub pair_contacts: u32,
    pub wall_contacts: u32,
}

/// Write the control request into a body's acceleration
pub fn apply_control(body: &mut Body, input: &ControlInput, jerk: f32) {
    for axis in Axis::ALL {
        body.accelerate(axis, input.axis_request(axis, jerk));
    }
}

/// Advance `bodies` by one tick
///
/// `controlled` names the only body that receives `input`; an index outside
/// `bodies` drives nothing.
pub fn step(
    bodies: &mut [Body],
    controlled: Option<usize>,
    input: &ControlInput,
    params: &StepParams,
    bounds: &Bounds,
) -> StepStats {
    let mut stats = StepStats::default();

    if let Some(body) = controlled.and_then(|i| bodies.get_mut(i)) {
        apply_control(body, input, params.jerk);
    }

    for body in bodies.iter_mut() {
        body.integrate(params.jerk, params.friction);
    }

    for body in bodies.iter_mut() {
        let walls = resolve_boundary_penetration(body, bounds);
        reflect_off_walls(body, walls);
        stats.wall_contacts += walls.count();
    }

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if is_colliding(a, b) {
                resolve_penetration(a, b);
                resolve_pair(params.response, a, b, params.approach_guard);
                stats.pair_contacts += 1;
            }
        }
    }

    stats
}

/// Stage `input` and advance the simulation context by one tick
pub fn tick(state: &mut SimState, input: &ControlInput) -> StepStats {
    state.stage_input(*input);
    state.time_ticks += 1;

    let stats = step(
        &mut state.bodies,
        state.controlled,
        &state.input,
        &state.params,
        &state.bounds,
    );

    if stats.pair_contacts > 0 || stats.wall_contacts > 0 {
        log::debug!(
            "tick {}: {} pair contacts, {} wall contacts",
            state.time_ticks,
            stats.pair_contacts,
            stats.wall_contacts
        );
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    fn arena() -> Bounds {
        Bounds::new(Vec2::ZERO, 800.0, 800.0)
    }

    fn spread_out() -> Vec<Body> {
        vec![
            Body::new(1, Vec2::new(100.0, 100.0), 20.0, 20.0),
            Body::new(2, Vec2::new(400.0, 400.0), 30.0, 30.0),
            Body::new(3, Vec2::new(700.0, 200.0), 10.0, 0.0),
        ]
    }

    #[test]
    fn test_resting_state_is_unchanged() {
        let mut bodies = spread_out();
        let before = bodies.clone();
        let stats = step(
            &mut bodies,
            Some(0),
            &ControlInput::default(),
            &StepParams::default(),
            &arena(),
        );

        assert_eq!(bodies, before);
        assert_eq!(stats, StepStats::default());
    }

    #[test]
    fn test_control_drives_only_controlled_body() {
        let mut bodies = spread_out();
        let input = ControlInput {
            right: true,
            up: true,
            ..Default::default()
        };
        let params = StepParams {
            friction: 0.0,
            ..Default::default()
        };
        step(&mut bodies, Some(1), &input, &params, &arena());

        let driven = &bodies[1];
        assert!(driven.velocity.x > 0.0 && driven.velocity.y < 0.0);
        assert_abs_diff_eq!(driven.velocity.length(), params.jerk, epsilon = 1e-5);
        assert_eq!(bodies[0].velocity, Vec2::ZERO);
        assert_eq!(bodies[2].velocity, Vec2::ZERO);
    }

    #[test]
    fn test_opposite_keys_resolve_to_down_and_right() {
        let input = ControlInput {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        let mut body = Body::new(1, Vec2::ZERO, 1.0, 1.0);
        apply_control(&mut body, &input, 2.0);
        assert_eq!(body.acceleration, Vec2::new(2.0, 2.0));

        apply_control(&mut body, &ControlInput::default(), 2.0);
        assert_eq!(body.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_out_of_range_controlled_index_is_ignored() {
        let mut bodies = spread_out();
        let before = bodies.clone();
        let input = ControlInput {
            left: true,
            ..Default::default()
        };
        step(&mut bodies, Some(42), &input, &StepParams::default(), &arena());
        assert_eq!(bodies, before);
    }

    #[test]
    fn test_overlap_resolved_within_tick() {
        let mut bodies = vec![
            Body::new(1, Vec2::new(390.0, 400.0), 20.0, 10.0).with_velocity(Vec2::new(2.0, 0.0)),
            Body::new(2, Vec2::new(420.0, 400.0), 20.0, 10.0).with_velocity(Vec2::new(-2.0, 0.0)),
        ];
        let params = StepParams {
            friction: 0.0,
            ..Default::default()
        };
        let stats = step(&mut bodies, None, &ControlInput::default(), &params, &arena());

        assert_eq!(stats.pair_contacts, 1);
        assert_abs_diff_eq!(
            bodies[0].position.distance(bodies[1].position),
            40.0,
            epsilon = 1e-3
        );
        // Equal masses exchange velocities
        assert_abs_diff_eq!(bodies[0].velocity.x, -2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(bodies[1].velocity.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_immovable_pair_left_alone() {
        let mut bodies = vec![
            Body::new(1, Vec2::new(400.0, 400.0), 20.0, 0.0),
            Body::new(2, Vec2::new(410.0, 400.0), 20.0, 0.0),
        ];
        let before = bodies.clone();
        let stats = step(
            &mut bodies,
            None,
            &ControlInput::default(),
            &StepParams::default(),
            &arena(),
        );

        assert_eq!(stats.pair_contacts, 1);
        assert_eq!(bodies, before);
        assert!(bodies.iter().all(|b| b.position.is_finite()));
    }

    #[test]
    fn test_wall_bounce_in_step() {
        let mut bodies =
            vec![Body::new(1, Vec2::new(785.0, 400.0), 10.0, 1.0).with_velocity(Vec2::new(10.0, 0.0))];
        let params = StepParams {
            friction: 0.0,
            ..Default::default()
        };
        let stats = step(&mut bodies, None, &ControlInput::default(), &params, &arena());

        assert_eq!(stats.wall_contacts, 1);
        assert_abs_diff_eq!(bodies[0].position.x, 790.0, epsilon = 1e-4);
        assert_eq!(bodies[0].velocity, Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn test_tick_counts_and_stages_input() {
        let mut state = SimState::new(spread_out(), arena(), StepParams::default());
        let input = ControlInput {
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        tick(&mut state, &input);

        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.input, input);
        assert!(state.bodies[0].velocity.y > 0.0);
    }

    #[test]
    fn test_determinism() {
        let bodies: Vec<Body> = (0..12)
            .map(|i| {
                let x = 60.0 + (i % 4) as f32 * 45.0;
                let y = 60.0 + (i / 4) as f32 * 45.0;
                Body::new(i, Vec2::new(x, y), 24.0, 24.0 + i as f32)
                    .with_velocity(Vec2::new((i as f32 * 0.7).sin() * 3.0, (i as f32).cos() * 3.0))
            })
            .collect();

        let mut state1 = SimState::new(bodies.clone(), arena(), StepParams::default());
        let mut state2 = SimState::new(bodies, arena(), StepParams::default());

        for t in 0..300u32 {
            let input = ControlInput {
                right: t % 50 < 25,
                down: t % 80 < 10,
                ..Default::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.bodies, state2.bodies);
    }

    #[test]
    fn test_crowd_settles_without_lingering_overlap() {
        // Grid packed with overlaps, run with friction and check separation holds
        let bodies: Vec<Body> = (0..16)
            .map(|i| {
                let x = 300.0 + (i % 4) as f32 * 40.0;
                let y = 300.0 + (i / 4) as f32 * 40.0;
                Body::new(i, Vec2::new(x, y), 24.0, 24.0)
            })
            .collect();
        let mut state = SimState::new(bodies, arena(), StepParams::default());
        for _ in 0..600 {
            tick(&mut state, &ControlInput::default());
        }

        let mut worst = 0.0f32;
        for i in 0..state.bodies.len() {
            for j in (i + 1)..state.bodies.len() {
                let (a, b) = (&state.bodies[i], &state.bodies[j]);
                if is_colliding(a, b) {
                    worst = worst.max(a.radius + b.radius - a.position.distance(b.position));
                }
            }
        }
        assert!(worst < 1.0, "residual overlap {worst}");
        assert!(state.bodies.iter().all(|b| b.position.is_finite()));
    }
}
