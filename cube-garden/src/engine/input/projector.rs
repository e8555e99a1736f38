use bevy::prelude::*;

use crate::simulation::pointer::{PointerProjector, ndc_to_screen};

/// Casts pointer rays through a Bevy camera.
pub struct CameraProjector<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl PointerProjector for CameraProjector<'_> {
    fn ray_through(&self, ndc: Vec2) -> Option<Ray3d> {
        let size = self.camera.logical_viewport_size()?;
        self.camera
            .viewport_to_world(self.transform, ndc_to_screen(ndc, size))
            .ok()
    }

    fn eye(&self) -> Vec3 {
        self.transform.translation()
    }
}
