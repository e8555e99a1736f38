use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the settings asset.
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Settings are in and valid: build the scene.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.settings_validated {
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
