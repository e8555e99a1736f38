/// Edge length of the square floor.
pub const FLOOR_SIZE: f32 = 75.0;

/// Height of the visible floor mesh. Slightly below the cubes' base to avoid z-fighting.
pub const FLOOR_MESH_Y: f32 = -5.01;

/// Height of the infinite plane used to trace the pointer past the floor's edge.
pub const GROUND_PLANE_Y: f32 = 0.0;

pub const FLOOR_OPACITY: f32 = 0.5;
