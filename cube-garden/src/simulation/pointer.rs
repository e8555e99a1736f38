use bevy::math::{Ray3d, Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Raw pointer input, already normalised to device coordinates in [-1, 1] with +y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, ndc: Vec2 },
    Move { ndc: Vec2 },
    Up { button: PointerButton },
}

/// Turns pointer positions into rays through the scene.
pub trait PointerProjector {
    fn ray_through(&self, ndc: Vec2) -> Option<Ray3d>;

    /// Where the viewer stands.
    fn eye(&self) -> Vec3;
}

/// Maps `value` in `[0, range]` onto `[-1, 1]`.
pub fn normalize_in_range(value: f32, range: f32) -> f32 {
    value / range * 2.0 - 1.0
}

/// Screen position in logical pixels to device coordinates. Screen y grows down.
pub fn screen_to_ndc(position: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        normalize_in_range(position.x, size.x),
        -normalize_in_range(position.y, size.y),
    )
}

/// Inverse of [`screen_to_ndc`].
pub fn ndc_to_screen(ndc: Vec2, size: Vec2) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * size.x, (1.0 - ndc.y) * 0.5 * size.y)
}
