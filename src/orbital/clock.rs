//! Simulation clock: advances body angles once per frame

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::bodies::BodyRegistry;

/// Global simulation parameters.
///
/// Read by the clock every step, written only through the control surface.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationParams {
    paused: bool,
    speed_multiplier: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            paused: false,
            speed_multiplier: 1.0,
        }
    }
}

impl SimulationParams {
    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub(crate) fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
    }
}

/// Wrap an angle into [0, 2π)
pub fn wrap_tau(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Advance every body by one step. A no-op while paused.
pub fn step(registry: &mut BodyRegistry, params: &SimulationParams) {
    if params.paused {
        return;
    }
    let multiplier = params.speed_multiplier;
    for body in registry.bodies_mut() {
        let next = body.angle() + body.angular_speed() * multiplier;
        body.set_angle(wrap_tau(next));
    }
}

/// System: one clock step per rendered frame
pub fn advance_bodies(mut registry: ResMut<BodyRegistry>, params: Res<SimulationParams>) {
    // Don't flag the registry as changed while nothing moves
    if params.paused {
        return;
    }
    step(&mut registry, &params);
}

/// Run condition for anything that should only move while the simulation runs
pub fn simulation_running(params: Res<SimulationParams>) -> bool {
    !params.paused
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec3;

    const EPSILON: f64 = 1e-9;

    /// Smallest distance between two angles on the circle
    fn angular_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn test_params_default() {
        let params = SimulationParams::default();
        assert!(!params.paused());
        assert_eq!(params.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_n_steps_accumulate_speed_times_multiplier() {
        let mut registry = BodyRegistry::default();
        let a = registry.create_body("A", 0.5, 4.0, 0.013).unwrap();
        let b = registry.create_body("B", 0.5, 6.0, 0.05).unwrap();
        let mut params = SimulationParams::default();
        params.set_speed_multiplier(2.5);

        let n = 1000;
        for _ in 0..n {
            step(&mut registry, &params);
        }

        for (id, s) in [(a, 0.013), (b, 0.05)] {
            let expected = n as f64 * s * 2.5;
            let angle = registry.get(id).unwrap().angle();
            assert!((0.0..TAU).contains(&angle));
            assert!(
                angular_gap(angle, expected) < 1e-9,
                "angle {angle} vs expected {expected}"
            );
        }
    }

    #[test]
    fn test_paused_step_is_bit_identical() {
        let mut registry = BodyRegistry::default();
        registry.create_body("A", 0.5, 4.0, 0.013).unwrap();
        registry.create_body("B", 0.5, 6.0, 0.01).unwrap();
        let running = SimulationParams::default();
        for _ in 0..37 {
            step(&mut registry, &running);
        }

        let before: Vec<u64> = registry
            .list_bodies()
            .iter()
            .map(|b| b.angle().to_bits())
            .collect();

        let mut paused = SimulationParams::default();
        paused.set_paused(true);
        for _ in 0..10 {
            step(&mut registry, &paused);
        }

        let after: Vec<u64> = registry
            .list_bodies()
            .iter()
            .map(|b| b.angle().to_bits())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_multiplier_freezes_motion() {
        let mut registry = BodyRegistry::default();
        let id = registry.create_body("A", 0.5, 4.0, 0.013).unwrap();
        let mut params = SimulationParams::default();
        params.set_speed_multiplier(0.0);
        for _ in 0..10 {
            step(&mut registry, &params);
        }
        assert_eq!(registry.get(id).unwrap().angle(), 0.0);
    }

    #[test]
    fn test_circular_invariant_holds_every_step() {
        let mut registry = BodyRegistry::default();
        registry.create_body("A", 0.5, 4.0, 0.05).unwrap();
        registry.create_body("B", 0.85, 16.0, 0.001).unwrap();
        let mut params = SimulationParams::default();
        params.set_speed_multiplier(5.0);

        for _ in 0..500 {
            step(&mut registry, &params);
            for body in registry.list_bodies() {
                let p = body.position();
                let d = body.orbit_distance();
                assert!((p.x * p.x + p.z * p.z - d * d).abs() < 1e-9);
                assert_eq!(p.y, 0.0);
            }
        }
    }

    #[test]
    fn test_earth_scenario() {
        let mut registry = BodyRegistry::default();
        let earth = registry.create_body("Earth", 0.85, 8.0, 0.009).unwrap();
        let params = SimulationParams::default();

        for _ in 0..100 {
            step(&mut registry, &params);
        }

        let body = registry.get(earth).unwrap();
        assert!((body.angle() - 0.9).abs() < EPSILON);
        let expected = DVec3::new(8.0 * 0.9_f64.cos(), 0.0, 8.0 * 0.9_f64.sin());
        assert!((body.position() - expected).length() < 1e-8);
    }

    #[test]
    fn test_long_run_stays_bounded() {
        // About three hours at 60 steps/sec with the fastest slider setting
        let mut registry = BodyRegistry::default();
        let id = registry.create_body("Fast", 0.5, 4.0, 0.05).unwrap();
        let mut params = SimulationParams::default();
        params.set_speed_multiplier(5.0);

        for _ in 0..650_000 {
            step(&mut registry, &params);
        }
        let angle = registry.get(id).unwrap().angle();
        assert!((0.0..TAU).contains(&angle));
        assert!(angle.is_finite());
    }

    #[test]
    fn test_wrap_tau() {
        assert_eq!(wrap_tau(0.0), 0.0);
        assert!((wrap_tau(TAU + 0.5) - 0.5).abs() < EPSILON);
        assert!((wrap_tau(-0.5) - (TAU - 0.5)).abs() < EPSILON);
        assert!(wrap_tau(-1e-18) < TAU);
    }
}
