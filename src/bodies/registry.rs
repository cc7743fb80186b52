//! Authoritative state for every orbiting body

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::error::{SimError, SimResult};

/// Stable handle to a registered body. Bodies are never removed, so a handle
/// stays valid for the lifetime of the registry that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A body on a fixed circular orbit around the origin
#[derive(Clone, Debug)]
pub struct Body {
    name: String,
    radius: f64,
    orbit_distance: f64,
    angle: f64,
    angular_speed: f64,
}

impl Body {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visual size, also used as the picking sphere radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orbit_distance(&self) -> f64 {
        self.orbit_distance
    }

    /// Current orbital angle in radians, kept in [0, 2π)
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Radians advanced per step at a global multiplier of 1
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Position in the orbital plane (y = 0), derived from angle and distance
    pub fn position(&self) -> DVec3 {
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(self.orbit_distance * cos, 0.0, self.orbit_distance * sin)
    }

    pub(crate) fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    pub(crate) fn set_angular_speed(&mut self, speed: f64) {
        self.angular_speed = speed;
    }
}

/// Ordered set of bodies. Insertion order is display and slider order.
#[derive(Resource, Default, Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    /// Append a new body starting at angle 0
    pub fn create_body(
        &mut self,
        name: impl Into<String>,
        radius: f64,
        orbit_distance: f64,
        angular_speed: f64,
    ) -> SimResult<BodyId> {
        let name = name.into();
        if self.find(&name).is_some() {
            return Err(SimError::DuplicateName(name));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidOrbitParameter(format!(
                "radius of '{name}' must be positive, got {radius}"
            )));
        }
        if !(orbit_distance.is_finite() && orbit_distance > 0.0) {
            return Err(SimError::InvalidOrbitParameter(format!(
                "orbit distance of '{name}' must be positive, got {orbit_distance}"
            )));
        }
        if !angular_speed.is_finite() {
            return Err(SimError::InvalidOrbitParameter(format!(
                "angular speed of '{name}' must be finite"
            )));
        }

        let id = BodyId(self.bodies.len());
        self.bodies.push(Body {
            name,
            radius,
            orbit_distance,
            angle: 0.0,
            angular_speed,
        });
        Ok(id)
    }

    /// Read-only ordered view of all bodies
    pub fn list_bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub(crate) fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .map(BodyId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
