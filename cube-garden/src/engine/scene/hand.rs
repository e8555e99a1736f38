use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use bevy::window::PrimaryWindow;
use constants::hand::HAND_EMISSIVE_INTENSITY;
use constants::render_settings::{HAND_COLOUR, OVERLAY_LAYER};

use crate::engine::core::app_setup::PlaygroundCamera;
use crate::engine::input::projector::CameraProjector;
use crate::engine::input::queue::PointerQueue;
use crate::simulation::cube::Cube;
use crate::simulation::floor::Floor;
use crate::simulation::hand::{CubeSlot, Grip, HandController};
use crate::simulation::time::FrameTime;

#[derive(Component)]
pub struct HandRoot;

/// A piece of one of the two hand models.
#[derive(Component)]
pub struct HandPart {
    grip: Grip,
}

/// Builds both hand models under one root. Local +Z points away from the
/// surface the hand rests on, so the palm lies in the XY plane.
pub fn spawn_hand(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: HAND_COLOUR,
        emissive: LinearRgba::from(HAND_COLOUR) * HAND_EMISSIVE_INTENSITY,
        perceptual_roughness: 0.8,
        ..default()
    });
    let palm = meshes.add(Cuboid::new(2.6, 3.0, 0.8));
    let finger = meshes.add(Capsule3d::new(0.3, 1.6));
    let fist = meshes.add(Cuboid::new(2.8, 2.4, 1.8));
    let knuckle = meshes.add(Capsule3d::new(0.35, 2.0));

    let part = |grip: Grip, mesh: &Handle<Mesh>, transform: Transform| {
        (
            HandPart { grip },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            transform,
            RenderLayers::layer(0),
        )
    };

    commands
        .spawn((
            HandRoot,
            Transform::default(),
            Visibility::Hidden,
            Name::new("Hand"),
        ))
        .with_children(|hand| {
            hand.spawn(part(Grip::Open, &palm, Transform::from_xyz(0.0, 0.0, 0.4)));
            for i in 0..4 {
                let x = -0.95 + i as f32 * 0.63;
                hand.spawn(part(Grip::Open, &finger, Transform::from_xyz(x, 2.5, 0.4)));
            }
            hand.spawn(part(
                Grip::Open,
                &finger,
                Transform::from_xyz(-1.8, 0.2, 0.4).with_rotation(Quat::from_rotation_z(0.9)),
            ));

            hand.spawn(part(Grip::Grabbing, &fist, Transform::from_xyz(0.0, 0.0, 0.9)));
            hand.spawn(part(
                Grip::Grabbing,
                &knuckle,
                Transform::from_xyz(0.0, 1.2, 1.4).with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
            ));
        });
}

/// Feeds this frame's pointer events to the hand, then runs its per-frame update.
pub fn drive_hand(
    mut queue: ResMut<PointerQueue>,
    mut hand: ResMut<HandController>,
    mut cubes: Query<(Entity, &mut Cube)>,
    cameras: Query<(&Camera, &GlobalTransform), With<PlaygroundCamera>>,
    floor: Res<Floor>,
    time: Res<Time>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let projector = CameraProjector {
        camera,
        transform: camera_transform,
    };

    let mut slots: Vec<CubeSlot<'_>> = cubes
        .iter_mut()
        .map(|(entity, cube)| (entity, cube.into_inner()))
        .collect();

    for event in queue.drain() {
        hand.handle(event, &projector, &mut slots, &floor);
    }
    hand.update(FrameTime::from(&*time), &projector, &slots);
}

pub fn sync_hand_visuals(
    hand: Res<HandController>,
    mut roots: Query<(&mut Transform, &mut Visibility), With<HandRoot>>,
    mut parts: Query<(&HandPart, &mut Visibility, &mut RenderLayers), Without<HandRoot>>,
) {
    let pose = hand.pose();
    for (mut transform, mut visibility) in &mut roots {
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
        *visibility = if pose.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    // A held cube must not hide the hand, so the fist is drawn by the overlay camera.
    let layer = match hand.grip() {
        Grip::Open => RenderLayers::layer(0),
        Grip::Grabbing => RenderLayers::layer(OVERLAY_LAYER),
    };
    for (part, mut visibility, mut layers) in &mut parts {
        *visibility = if part.grip == hand.grip() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *layers != layer {
            *layers = layer.clone();
        }
    }
}

pub fn sync_cursor(hand: Res<HandController>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let visible = !hand.cursor_hidden();
    if window.cursor_options.visible != visible {
        window.cursor_options.visible = visible;
    }
}
