use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{
    BACKGROUND_COLOUR, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, LIGHT_ILLUMINANCE,
    OVERLAY_LAYER,
};

use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::queue::PointerQueue;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{SettingsLoader, load_settings_system, start_loading};
use crate::engine::scene::GardenScenePlugin;
use crate::settings::PlaygroundSettings;
use crate::simulation::hand::HandController;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::{core::app_state::FpsText, systems::fps_tracking::fps_text_update_system};

/// The camera pointer rays are cast from.
#[derive(Component)]
pub struct PlaygroundCamera;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PlaygroundSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<PlaygroundSettings>::new(&["json"]))
        .add_plugins(GardenScenePlugin)
        .insert_resource(ClearColor(BACKGROUND_COLOUR))
        .insert_resource(AmbientLight {
            brightness: 300.0,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<PointerQueue>()
        .init_resource::<HandController>()
        .init_resource::<OrbitCamera>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_settings_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(Update, camera_controller.run_if(in_state(AppState::Running)));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Lights both the scene layer and the overlay layer the held hand is drawn on.
fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
        RenderLayers::from_layers(&[0, OVERLAY_LAYER]),
    ));
}

fn playground_projection() -> Projection {
    Projection::from(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

/// Main camera plus a child camera that draws the overlay layer on top of it
/// with a fresh depth buffer.
fn spawn_cameras(commands: &mut Commands) {
    commands
        .spawn((
            Camera3d::default(),
            playground_projection(),
            OrbitCamera::default().transform(),
            PlaygroundCamera,
            Name::new("Camera"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Camera3d::default(),
                Camera {
                    order: 1,
                    clear_color: ClearColorConfig::None,
                    ..default()
                },
                playground_projection(),
                RenderLayers::layer(OVERLAY_LAYER),
                Name::new("Overlay Camera"),
            ));
        });
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_cameras(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
