//! The central star

use bevy::prelude::*;

pub const SUN_RADIUS: f32 = 2.0;
/// Spin about y, in radians per unpaused frame
pub const SUN_SPIN_PER_STEP: f32 = 0.001;

#[derive(Component)]
pub struct Sun;

pub fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let yellow = Color::srgb(1.0, 1.0, 0.0);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: yellow,
            emissive: LinearRgba::from(yellow) * 1.5,
            ..default()
        })),
        Transform::IDENTITY,
        Sun,
        Name::new("Sun"),
    ));
}

/// Cosmetic rotation. Runs in the step set, so it stops with the clock.
pub fn spin_sun(mut suns: Query<&mut Transform, With<Sun>>) {
    for mut transform in suns.iter_mut() {
        transform.rotate_y(SUN_SPIN_PER_STEP);
    }
}
