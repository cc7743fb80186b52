//! Orbit rings drawn as closed line strips

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::bodies::{BodyId, BodyRegistry};
use crate::config::{SystemConfig, hex_color};
use crate::error::SimResult;
use crate::orbital::generate_orbit_path;

const ORBIT_COLOR: u32 = 0x444444;

#[derive(Component, Debug)]
pub struct OrbitRing(pub BodyId);

/// Line-strip mesh through the sampled ring. The last point repeats the first,
/// which closes the loop.
pub fn orbit_mesh(distance: f64, segments: usize) -> SimResult<Mesh> {
    let positions: Vec<[f32; 3]> = generate_orbit_path(distance, segments)?
        .into_iter()
        .map(|p| p.as_vec3().to_array())
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    Ok(mesh)
}

/// One ring per registered body, built once
pub fn spawn_orbit_rings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<BodyRegistry>,
    config: Res<SystemConfig>,
) {
    let material = materials.add(StandardMaterial {
        base_color: hex_color(ORBIT_COLOR),
        unlit: true,
        ..default()
    });

    for (id, body) in registry.iter() {
        match orbit_mesh(body.orbit_distance(), config.orbit_segments) {
            Ok(mesh) => {
                commands.spawn((
                    Mesh3d(meshes.add(mesh)),
                    MeshMaterial3d(material.clone()),
                    Transform::IDENTITY,
                    OrbitRing(id),
                    Name::new(format!("{} Orbit", body.name())),
                ));
            }
            Err(e) => warn!("No orbit ring for {}: {}", body.name(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;

    #[test]
    fn test_orbit_mesh_is_closed_strip() {
        let mesh = orbit_mesh(8.0, 100).unwrap();
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineStrip);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("missing positions");
        };
        assert_eq!(positions.len(), 101);

        let first = Vec3::from_array(positions[0]);
        let last = Vec3::from_array(positions[100]);
        assert!((first - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-4);
        assert!((first - last).length() < 1e-4);
    }

    #[test]
    fn test_orbit_mesh_rejects_bad_distance() {
        assert!(orbit_mesh(0.0, 100).is_err());
    }
}
