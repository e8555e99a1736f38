use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::progress::LoadingProgress;
use crate::settings::{PlaygroundSettings, SETTINGS_PATH, SettingsError};
use crate::simulation::floor::Floor;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<PlaygroundSettings>>,
}

// Start the loading process
pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    info!("Loading settings from {SETTINGS_PATH}");
    settings_loader.handle = Some(asset_server.load(SETTINGS_PATH));
}

/// Waits for the settings file, then installs the resources the scene is built from.
/// A missing or invalid file stops the app.
pub fn load_settings_system(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<PlaygroundSettings>>,
    mut exit: EventWriter<AppExit>,
) {
    if loading_progress.settings_loaded {
        return;
    }
    let Some(handle) = settings_loader.handle.as_ref() else {
        return;
    };

    if let Some(LoadState::Failed(reason)) = asset_server.get_load_state(handle.id()) {
        let error = SettingsError::LoadFailed {
            path: SETTINGS_PATH.into(),
            reason: reason.to_string(),
        };
        error!("{error}");
        loading_progress.settings_loaded = true;
        exit.write(AppExit::error());
        return;
    }

    let Some(settings) = settings_assets.get(handle) else {
        return;
    };
    loading_progress.settings_loaded = true;

    if let Err(error) = settings.validate() {
        error!("Invalid settings in {SETTINGS_PATH}: {error}");
        exit.write(AppExit::error());
        return;
    }

    info!(
        "✓ Settings loaded: {} cubes on a {}-unit floor",
        settings.cubes.len(),
        settings.floor_size
    );
    commands.insert_resource(Floor::new(settings.floor_size));
    commands.insert_resource(OrbitCamera::new(settings.camera_distance, settings.camera_pitch));
    commands.insert_resource(settings.clone());
    loading_progress.settings_validated = true;
}
