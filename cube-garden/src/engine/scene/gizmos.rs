use bevy::prelude::*;
use constants::render_settings::BOUNDARY_GIZMO_COLOUR;

use crate::settings::PlaygroundSettings;
use crate::simulation::floor::Floor;

/// Draws each floor edge ray as an arrow one floor-length long.
pub fn draw_boundaries(mut gizmos: Gizmos, floor: Res<Floor>, settings: Res<PlaygroundSettings>) {
    if !settings.show_boundaries {
        return;
    }
    for boundary in floor.boundaries() {
        let ray = boundary.ray;
        gizmos.arrow(ray.origin, ray.get_point(floor.size()), BOUNDARY_GIZMO_COLOUR);
    }
}
