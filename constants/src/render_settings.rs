use bevy::color::Color;

pub const BACKGROUND_COLOUR: Color = Color::srgb(0.58, 0.52, 0.78);
pub const FLOOR_COLOUR: Color = Color::srgba(0.85, 0.85, 0.85, 0.5);
pub const HEART_COLOUR: Color = Color::srgb(0.9, 0.08, 0.15);
pub const HAND_COLOUR: Color = Color::srgb(1.0, 0.86, 0.74);
pub const BOUNDARY_GIZMO_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);

/// Render layer for meshes drawn above everything else.
pub const OVERLAY_LAYER: usize = 1;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const DEFAULT_CAMERA_DISTANCE: f32 = 60.0;
pub const DEFAULT_CAMERA_PITCH: f32 = -0.6;
pub const LIGHT_ILLUMINANCE: f32 = 8_000.0;

pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Zoom limits of the orbit camera.
pub const CAMERA_MIN_DISTANCE: f32 = 15.0;
pub const CAMERA_MAX_DISTANCE: f32 = 200.0;
