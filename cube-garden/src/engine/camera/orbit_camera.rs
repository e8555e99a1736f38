use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::render_settings::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE};

use crate::engine::core::app_setup::PlaygroundCamera;

const YAW_SENSITIVITY: f32 = 0.0035;
const PITCH_SENSITIVITY: f32 = 0.0030;
const PITCH_LIMIT: f32 = 1.55;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32) -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            yaw: 0.0,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera position on the orbit, looking back at the focus point.
    pub fn translation(&self) -> Vec3 {
        self.focus_point + self.rotation() * Vec3::Z * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).with_rotation(self.rotation())
    }

    pub fn orbit(&mut self, mouse_delta: Vec2) {
        self.yaw += -mouse_delta.x * YAW_SENSITIVITY;
        self.pitch += -mouse_delta.y * PITCH_SENSITIVITY;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        let step = (self.distance * 0.1).max(1.0);
        self.distance = (self.distance - scroll * step).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(
            constants::render_settings::DEFAULT_CAMERA_DISTANCE,
            constants::render_settings::DEFAULT_CAMERA_PITCH,
        )
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<PlaygroundCamera>>,
    mut orbit_camera: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        orbit_camera.orbit(mouse_delta);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let scroll: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();
    if scroll.abs() > f32::EPSILON {
        orbit_camera.zoom(scroll);
    }

    let target = orbit_camera.transform();
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_looks_down_at_the_focus() {
        let camera = OrbitCamera::new(60.0, -0.6);
        let transform = camera.transform();

        assert!(transform.translation.y > 0.0);
        assert!((transform.translation.length() - 60.0).abs() < 1e-3);
        let towards_focus = (camera.focus_point - transform.translation).normalize();
        assert!(transform.forward().as_vec3().abs_diff_eq(towards_focus, 1e-4));
    }

    #[test]
    fn zoom_and_pitch_are_clamped() {
        let mut camera = OrbitCamera::new(60.0, -0.6);
        camera.zoom(1_000.0);
        assert_eq!(camera.distance, CAMERA_MIN_DISTANCE);
        camera.zoom(-1_000.0);
        assert_eq!(camera.distance, CAMERA_MAX_DISTANCE);

        camera.orbit(Vec2::new(0.0, 10_000.0));
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }
}
