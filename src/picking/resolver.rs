//! Pointer-to-body resolution by ray casting against bounding spheres

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry};

/// Renderer capability: turn a pointer in normalized device coordinates into
/// a world-space ray.
///
/// NDC spans [-1, 1] on both axes with the origin at the viewport center and
/// y pointing up.
pub trait RayProjection {
    fn ray_through(&self, ndc: Vec2) -> Option<Ray3d>;
}

/// A Bevy camera and its world transform
pub struct CameraView<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl RayProjection for CameraView<'_> {
    fn ray_through(&self, ndc: Vec2) -> Option<Ray3d> {
        // Reverse-z: the near plane is at depth 1, the far plane approaches 0
        let near: Vec3 = self.camera.ndc_to_world(self.transform, ndc.extend(1.0))?;
        let far: Vec3 = self
            .camera
            .ndc_to_world(self.transform, ndc.extend(f32::EPSILON))?;
        let direction = Dir3::new(far - near).ok()?;
        Some(Ray3d::new(near, direction))
    }
}

/// Nearest body whose bounding sphere the ray hits, with the hit distance.
///
/// Equal distances resolve to the earlier body in registry order.
pub fn nearest_hit(ray: Ray3d, registry: &BodyRegistry) -> Option<(BodyId, f32)> {
    let cast = RayCast3d::from_ray(ray, f32::MAX);
    let mut best: Option<(BodyId, f32)> = None;
    for (id, body) in registry.iter() {
        let sphere = BoundingSphere::new(body.position().as_vec3(), body.radius() as f32);
        if let Some(distance) = cast.sphere_intersection_at(&sphere)
            && best.is_none_or(|(_, d)| distance < d)
        {
            best = Some((id, distance));
        }
    }
    best
}

/// Resolve which body, if any, lies under the pointer this frame
pub fn resolve(
    pointer_ndc: Vec2,
    projection: &impl RayProjection,
    registry: &BodyRegistry,
) -> Option<BodyId> {
    let ray = projection.ray_through(pointer_ndc)?;
    nearest_hit(ray, registry).map(|(id, _)| id)
}
