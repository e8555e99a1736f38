use bevy::prelude::*;
use constants::floor::FLOOR_MESH_Y;
use constants::render_settings::FLOOR_COLOUR;

use crate::simulation::floor::Floor;

#[derive(Component)]
pub struct FloorMesh;

pub fn spawn_floor(
    mut commands: Commands,
    floor: Res<Floor>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: FLOOR_COLOUR,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        perceptual_roughness: 0.9,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(floor.size(), floor.size()))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, FLOOR_MESH_Y, 0.0),
        FloorMesh,
        Name::new("Floor"),
    ));
}
