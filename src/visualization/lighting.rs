//! Lighting setup

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Marker component for the point light at the sun's position
#[derive(Component)]
pub struct SunLight;

/// Point light at the origin plus a dim ambient term so night sides stay visible
pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 150.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: 4_000_000.0,
            range: 300.0,
            shadows_enabled: false,
            ..default()
        },
        SunLight,
        Transform::from_translation(Vec3::ZERO),
        Name::new("Sun Light"),
    ));
}
