use std::collections::HashSet;

use bevy::prelude::*;
use constants::render_settings::HEART_COLOUR;

use crate::simulation::hand::HandController;
use crate::simulation::heart::Heart;

/// Shared pieces of the heart model: two lobes and a point, in the XY plane.
#[derive(Resource)]
pub struct HeartAssets {
    parts: Vec<(Handle<Mesh>, Transform)>,
}

/// Render entity of one heart. Owns its material so it can fade alone.
#[derive(Component)]
pub struct HeartVisual {
    id: u64,
    material: Handle<StandardMaterial>,
}

pub fn create_heart_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let lobe = meshes.add(Sphere::new(0.55));
    let point = meshes.add(Cuboid::new(1.1, 1.1, 0.7));
    commands.insert_resource(HeartAssets {
        parts: vec![
            (lobe.clone(), Transform::from_xyz(-0.45, 0.35, 0.0)),
            (lobe, Transform::from_xyz(0.45, 0.35, 0.0)),
            (
                point,
                Transform::from_xyz(0.0, -0.15, 0.0)
                    .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
            ),
        ],
    });
}

fn heart_transform(heart: &Heart) -> Transform {
    Transform::from_translation(heart.translation)
        .with_rotation(heart.rotation)
        .with_scale(Vec3::splat(heart.scale))
}

/// Mirrors the hand's hearts: spawns new ones, moves and fades live ones,
/// despawns the ones it has dropped.
pub fn sync_hearts(
    mut commands: Commands,
    hand: Res<HandController>,
    heart_assets: Option<Res<HeartAssets>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visuals: Query<(Entity, &HeartVisual, &mut Transform)>,
) {
    let Some(heart_assets) = heart_assets else {
        return;
    };
    let hearts = hand.hearts();
    let mut shown = HashSet::new();

    for (entity, visual, mut transform) in &mut visuals {
        let Some(heart) = hearts.iter().find(|heart| heart.id() == visual.id) else {
            commands.entity(entity).despawn();
            continue;
        };
        *transform = heart_transform(heart);
        if let Some(material) = materials.get_mut(&visual.material) {
            material.base_color.set_alpha(heart.opacity.max(0.0));
        }
        shown.insert(heart.id());
    }

    for heart in hearts.iter().filter(|heart| !shown.contains(&heart.id())) {
        let material = materials.add(StandardMaterial {
            base_color: HEART_COLOUR.with_alpha(heart.opacity),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        commands
            .spawn((
                HeartVisual {
                    id: heart.id(),
                    material: material.clone(),
                },
                heart_transform(heart),
                Visibility::Visible,
                Name::new(format!("Heart {}", heart.id())),
            ))
            .with_children(|parent| {
                for (mesh, transform) in &heart_assets.parts {
                    parent.spawn((
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        *transform,
                    ));
                }
            });
    }
}
