//! The garden scene: floor, cubes, hand, hearts, labels and edge gizmos.
//!
//! Spawned once on entering [`AppState::Running`]. Every frame the pointer
//! queue is drained into the hand, the cubes advance, and the results are
//! copied onto their render entities.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::input::queue::collect_pointer_events;

/// Cube entities, their wandering and their rippling meshes.
pub mod cubes;

/// Floor mesh.
pub mod floor;

/// Boundary ray gizmos.
pub mod gizmos;

/// Hand model, pointer handling and cursor visibility.
pub mod hand;

/// Heart particle entities mirrored from the hand.
pub mod hearts;

/// Floating name labels.
pub mod labels;

pub struct GardenScenePlugin;

impl Plugin for GardenScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<cubes::WanderRng>()
            .add_systems(
                OnEnter(AppState::Running),
                (
                    floor::spawn_floor,
                    cubes::spawn_cubes,
                    hand::spawn_hand,
                    hearts::create_heart_assets,
                    labels::spawn_labels,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    collect_pointer_events,
                    hand::drive_hand,
                    cubes::advance_cubes,
                    (
                        cubes::sync_cube_transforms,
                        cubes::apply_cube_wobble,
                        hand::sync_hand_visuals,
                        hand::sync_cursor,
                        hearts::sync_hearts,
                        labels::update_labels,
                        gizmos::draw_boundaries,
                    ),
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
