use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::view::NoFrustumCulling;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::settings::PlaygroundSettings;
use crate::simulation::cube::Cube;
use crate::simulation::floor::Floor;
use crate::simulation::idle::Surroundings;
use crate::simulation::obb::Obb;
use crate::simulation::time::FrameTime;
use crate::simulation::wobble::{CubeGeometry, apply_wobble, segmented_cube};

/// Randomness behind every wandering decision.
#[derive(Resource)]
pub struct WanderRng(pub StdRng);

impl Default for WanderRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

/// Undeformed vertex positions of a cube mesh and the ripple last written to it.
#[derive(Component)]
pub struct WobbleMesh {
    base: Vec<[f32; 3]>,
    applied: f32,
}

pub fn spawn_cubes(
    mut commands: Commands,
    settings: Res<PlaygroundSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for spawn in &settings.cubes {
        let cube = Cube::new(spawn.name.clone(), spawn.kind, spawn.position(), spawn.yaw());
        let profile = cube.kind().profile();
        let geometry = segmented_cube(profile.size, profile.side_segments);
        let base = geometry.positions.clone();

        let material = materials.add(StandardMaterial {
            base_color: profile.colour,
            perceptual_roughness: 0.6,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(cube_mesh(geometry))),
            MeshMaterial3d(material),
            cube_transform(&cube),
            WobbleMesh { base, applied: 0.0 },
            // The ripple pushes vertices outside the undeformed bounds.
            NoFrustumCulling,
            Name::new(format!("Cube {}", spawn.name)),
            cube,
        ));
    }
    info!("Spawned {} cubes", settings.cubes.len());
}

fn cube_mesh(geometry: CubeGeometry) -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, geometry.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, geometry.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, geometry.uvs)
        .with_inserted_indices(Indices::U32(geometry.indices))
}

fn cube_transform(cube: &Cube) -> Transform {
    Transform::from_translation(cube.body.translation).with_rotation(cube.body.rotation())
}

/// Advances every free cube by one frame. Each cube sees the others as they
/// stood at the start of the frame.
pub fn advance_cubes(
    mut cubes: Query<(Entity, &mut Cube)>,
    floor: Res<Floor>,
    time: Res<Time>,
    mut rng: ResMut<WanderRng>,
) {
    let frame = FrameTime::from(&*time);
    let snapshot: Vec<(Entity, Obb)> = cubes.iter().map(|(entity, cube)| (entity, cube.obb())).collect();

    for (entity, mut cube) in &mut cubes {
        let others: Vec<Obb> = snapshot
            .iter()
            .filter(|(other, _)| *other != entity)
            .map(|(_, obb)| *obb)
            .collect();
        let surroundings = Surroundings {
            floor_size: floor.size(),
            others: &others,
        };
        cube.update(frame, &surroundings, &mut rng.0);
    }
}

pub fn sync_cube_transforms(mut cubes: Query<(&Cube, &mut Transform), Changed<Cube>>) {
    for (cube, mut transform) in &mut cubes {
        *transform = cube_transform(cube);
    }
}

/// Rewrites vertex positions from the undeformed copy whenever the ripple changes.
pub fn apply_cube_wobble(
    mut cubes: Query<(&Cube, &Mesh3d, &mut WobbleMesh), Changed<Cube>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for (cube, mesh, mut wobble) in &mut cubes {
        let wobbliness = cube.body.wobbliness;
        if wobbliness == wobble.applied {
            continue;
        }
        let Some(mesh) = meshes.get_mut(&mesh.0) else {
            continue;
        };
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, apply_wobble(&wobble.base, wobbliness));
        wobble.applied = wobbliness;
    }
}
