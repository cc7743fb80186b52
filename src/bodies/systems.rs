//! Body systems for registry setup and transform updates

use bevy::prelude::*;

use crate::bodies::components::{BodyPalette, OrbitingBody};
use crate::bodies::registry::BodyRegistry;
use crate::config::{BodySpec, SystemConfig};
use crate::error::SimError;

/// Build the registry from catalogue entries, skipping any that fail validation
pub fn build_registry(specs: &[BodySpec]) -> (BodyRegistry, BodyPalette, Vec<SimError>) {
    let mut registry = BodyRegistry::default();
    let mut palette = BodyPalette::default();
    let mut rejected = Vec::new();

    for spec in specs {
        match registry.create_body(
            spec.name.clone(),
            spec.radius,
            spec.orbit_distance,
            spec.angular_speed,
        ) {
            Ok(id) => {
                palette.insert(id, spec.bevy_color());
            }
            Err(e) => rejected.push(e),
        }
    }
    (registry, palette, rejected)
}

/// Startup system: create the one body set for the lifetime of the app
pub fn populate_registry(mut commands: Commands, config: Res<SystemConfig>) {
    let (registry, palette, rejected) = build_registry(&config.bodies);
    for e in &rejected {
        warn!("Skipping catalogue entry: {}", e);
    }
    info!("Registered {} bodies", registry.len());
    commands.insert_resource(registry);
    commands.insert_resource(palette);
}

/// Startup system: spawn one sphere per registered body
pub fn spawn_body_entities(
    registry: Res<BodyRegistry>,
    palette: Res<BodyPalette>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (id, body) in registry.iter() {
        let color = palette.get(&id).copied().unwrap_or(Color::WHITE);
        let mesh = Sphere::new(body.radius() as f32).mesh().uv(32, 32);
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(body.position().as_vec3()),
            OrbitingBody(id),
            Name::new(body.name().to_string()),
        ));
    }
}

/// System to copy derived body positions into entity transforms
pub fn sync_body_transforms(
    registry: Res<BodyRegistry>,
    mut q: Query<(&OrbitingBody, &mut Transform)>,
) {
    if !registry.is_changed() {
        return;
    }
    for (body_ref, mut transform) in q.iter_mut() {
        if let Some(body) = registry.get(body_ref.0) {
            transform.translation = body.position().as_vec3();
        }
    }
}
