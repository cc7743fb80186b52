//! Closed orbit polylines for visualization

use bevy::math::DVec3;
use std::f64::consts::TAU;

use crate::error::{SimError, SimResult};

pub const DEFAULT_ORBIT_SEGMENTS: usize = 100;

/// Points around a circle of radius `distance` in the y = 0 plane.
///
/// Returns `segments + 1` points evenly spaced by angle. The last point lands
/// back on angle 0 so the polyline closes.
pub fn generate_orbit_path(distance: f64, segments: usize) -> SimResult<Vec<DVec3>> {
    if !(distance.is_finite() && distance > 0.0) {
        return Err(SimError::InvalidOrbitParameter(format!(
            "orbit distance must be positive, got {distance}"
        )));
    }
    if segments < 3 {
        return Err(SimError::InvalidOrbitParameter(format!(
            "an orbit needs at least 3 segments, got {segments}"
        )));
    }

    Ok((0..=segments)
        .map(|i| {
            let angle = (i as f64 / segments as f64) * TAU;
            let (sin, cos) = angle.sin_cos();
            DVec3::new(distance * cos, 0.0, distance * sin)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_default_path_closes() {
        let points = generate_orbit_path(8.0, DEFAULT_ORBIT_SEGMENTS).unwrap();
        assert_eq!(points.len(), 101);

        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first - last).length() < EPSILON);
        assert!((first - DVec3::new(8.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_points_lie_on_circle() {
        let d = 13.0;
        for p in generate_orbit_path(d, 100).unwrap() {
            assert_eq!(p.y, 0.0);
            assert!((p.x * p.x + p.z * p.z - d * d).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quarter_turn_spacing() {
        let points = generate_orbit_path(2.0, 4).unwrap();
        assert_eq!(points.len(), 5);
        assert!((points[1] - DVec3::new(0.0, 0.0, 2.0)).length() < EPSILON);
        assert!((points[2] - DVec3::new(-2.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_degenerate_input_rejected() {
        assert!(matches!(
            generate_orbit_path(0.0, 100),
            Err(SimError::InvalidOrbitParameter(_))
        ));
        assert!(matches!(
            generate_orbit_path(-3.0, 100),
            Err(SimError::InvalidOrbitParameter(_))
        ));
        assert!(matches!(
            generate_orbit_path(5.0, 2),
            Err(SimError::InvalidOrbitParameter(_))
        ));
        assert!(generate_orbit_path(5.0, 3).is_ok());
    }
}
