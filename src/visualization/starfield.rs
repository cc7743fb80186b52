//! Background starfield

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SystemConfig;

#[derive(Component)]
pub struct Starfield;

/// Uniform scatter in a cube of side `spread` centred on the origin.
/// The same seed always gives the same sky.
pub fn star_positions(count: usize, spread: f32, seed: u64) -> Vec<[f32; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = spread / 2.0;
    (0..count)
        .map(|_| {
            [
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ]
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SystemConfig>,
) {
    if config.star_count == 0 {
        return;
    }

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        star_positions(config.star_count, config.star_spread, config.star_seed),
    );

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Starfield,
        Name::new("Starfield"),
    ));
    debug!("Spawned {} stars", config.star_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_positions_inside_cube() {
        let stars = star_positions(5000, 1000.0, 7);
        assert_eq!(stars.len(), 5000);
        assert!(stars.iter().flatten().all(|c| (-500.0..500.0).contains(c)));
    }

    #[test]
    fn test_star_positions_deterministic() {
        assert_eq!(star_positions(64, 10.0, 42), star_positions(64, 10.0, 42));
        assert_ne!(star_positions(64, 10.0, 42), star_positions(64, 10.0, 43));
    }
}
