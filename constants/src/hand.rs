/// Minimum effective pointer travel across a cube surface that spawns a heart.
pub const HEART_SPAWN_DISTANCE: f32 = 1.0;

/// Hearts grow with travel distance up to this scale.
pub const HEART_MAX_SCALE: f32 = 0.75;
pub const HEART_SCALE_DIVISOR: f32 = 4.0;

/// Vertical drift of a heart, in units per second.
pub const HEART_RISE_SPEED: f32 = 10.0;

/// Opacity lost per second.
pub const HEART_FADE_RATE: f32 = 1.0;

/// Gap between the top of a dragged cube and the hand.
pub const HAND_DRAG_OFFSET: f32 = 1.0;

pub const HAND_EMISSIVE_INTENSITY: f32 = 0.25;
