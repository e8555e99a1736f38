use bevy::color::Color;

/// Physical and visual parameters of one cube kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeProfile {
    /// Edge length.
    pub size: f32,
    /// Height segments of the side faces; more segments give a smoother wobble.
    pub side_segments: u32,
    pub wobble_speed: f32,
    pub wobble_range: f32,
    pub colour: Color,
}

pub const REGULAR: CubeProfile = CubeProfile {
    size: 10.0,
    side_segments: 15,
    wobble_speed: 5.0,
    wobble_range: 5.0,
    colour: Color::srgb(0.92, 0.92, 0.92),
};

pub const TOFU: CubeProfile = CubeProfile {
    size: 8.0,
    side_segments: 20,
    wobble_speed: 3.0,
    wobble_range: 9.0,
    colour: Color::srgb(0.97, 0.95, 0.86),
};

pub const ROBOT: CubeProfile = CubeProfile {
    size: 10.0,
    side_segments: 1,
    wobble_speed: 0.0,
    wobble_range: 0.0,
    colour: Color::srgb(0.55, 0.6, 0.66),
};

/// Divisor turning a wobble range into the per-vertex displacement coefficient.
pub const WOBBLE_SCALE: f32 = 100.0;

/// Height of a cube held by the hand.
pub const GRAB_LIFT: f32 = 1.0;

/// Height of a cube resting on the ground.
pub const REST_HEIGHT: f32 = 0.0;

/// Height at which the name label floats.
pub const LABEL_HEIGHT: f32 = 7.5;
