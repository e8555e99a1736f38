use bevy::math::{Dir3, Ray3d, Vec3};
use bevy::prelude::Resource;
use constants::floor::{FLOOR_MESH_Y, GROUND_PLANE_Y};

use super::obb::Obb;
use super::ray::ray_hits_horizontal_plane;

/// Axis a dragged cube may still slide along once it touches an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailAxis {
    X,
    Z,
}

/// One edge of the floor, traced as a ray running along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub ray: Ray3d,
}

impl Boundary {
    fn new(origin: Vec3, direction: Dir3) -> Self {
        Self {
            ray: Ray3d { origin, direction },
        }
    }

    /// The axis the edge ray runs along.
    pub fn rail(&self) -> Option<RailAxis> {
        let direction = self.ray.direction;
        if direction.x != 0.0 {
            Some(RailAxis::X)
        } else if direction.z != 0.0 {
            Some(RailAxis::Z)
        } else {
            None
        }
    }
}

/// Square floor centred on the origin.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Floor {
    size: f32,
    boundaries: [Boundary; 4],
}

impl Floor {
    pub fn new(size: f32) -> Self {
        let h = size * 0.5;
        let near_corner = Vec3::new(h, 0.0, -h);
        let far_corner = Vec3::new(-h, 0.0, h);

        Self {
            size,
            boundaries: [
                Boundary::new(near_corner, Dir3::Z),
                Boundary::new(far_corner, Dir3::NEG_Z),
                Boundary::new(far_corner, Dir3::X),
                Boundary::new(near_corner, Dir3::NEG_X),
            ],
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn half_extent(&self) -> f32 {
        self.size * 0.5
    }

    pub fn boundaries(&self) -> &[Boundary; 4] {
        &self.boundaries
    }

    /// Whether a horizontal position lies on the floor's footprint.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let h = self.half_extent();
        x.abs() <= h && z.abs() <= h
    }

    /// Point where `ray` meets the visible floor, if it lands inside the footprint.
    /// The floor is double sided.
    pub fn raycast_mesh(&self, ray: Ray3d) -> Option<Vec3> {
        let point = ray.get_point(ray_hits_horizontal_plane(ray, FLOOR_MESH_Y)?);
        self.contains(point.x, point.z).then_some(point)
    }

    /// Point where `ray` meets the unbounded ground plane.
    pub fn raycast_plane(&self, ray: Ray3d) -> Option<Vec3> {
        ray_hits_horizontal_plane(ray, GROUND_PLANE_Y).map(|t| ray.get_point(t))
    }

    /// First edge, in enumeration order, whose ray passes through `obb`.
    pub fn crossed_by(&self, obb: &Obb) -> Option<&Boundary> {
        self.boundaries
            .iter()
            .find(|boundary| obb.intersects_ray(boundary.ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Floor {
        Floor::new(75.0)
    }

    fn down_from(x: f32, z: f32) -> Ray3d {
        Ray3d {
            origin: Vec3::new(x, 100.0, z),
            direction: Dir3::NEG_Y,
        }
    }

    #[test]
    fn cube_in_the_middle_crosses_nothing() {
        let obb = Obb::cube(Vec3::ZERO, 0.3, 10.0);
        assert!(floor().crossed_by(&obb).is_none());
    }

    #[test]
    fn each_edge_reports_its_rail() {
        let floor = floor();
        let cases = [
            (Vec3::new(36.0, 0.0, 0.0), 0, RailAxis::Z),
            (Vec3::new(-36.0, 0.0, 0.0), 1, RailAxis::Z),
            (Vec3::new(0.0, 0.0, 36.0), 2, RailAxis::X),
            (Vec3::new(0.0, 0.0, -36.0), 3, RailAxis::X),
        ];

        for (center, index, rail) in cases {
            let boundary = floor
                .crossed_by(&Obb::cube(center, 0.0, 10.0))
                .expect("cube straddles an edge");
            assert_eq!(boundary, &floor.boundaries()[index], "cube at {center}");
            assert_eq!(boundary.rail(), Some(rail));
        }
    }

    #[test]
    fn corner_resolves_to_first_edge_in_order() {
        let floor = floor();
        let corner = Obb::cube(Vec3::new(36.0, 0.0, 36.0), 0.0, 10.0);
        assert_eq!(floor.crossed_by(&corner), Some(&floor.boundaries()[0]));
    }

    #[test]
    fn raised_cube_misses_the_edge_rays() {
        let obb = Obb::cube(Vec3::new(36.0, 20.0, 0.0), 0.0, 10.0);
        assert!(floor().crossed_by(&obb).is_none());
    }

    #[test]
    fn mesh_hits_only_inside_the_footprint() {
        let floor = floor();
        let hit = floor.raycast_mesh(down_from(30.0, -30.0)).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(30.0, FLOOR_MESH_Y, -30.0), 1e-4));

        assert!(floor.raycast_mesh(down_from(40.0, 0.0)).is_none());
    }

    #[test]
    fn mesh_is_double_sided() {
        let from_below = Ray3d {
            origin: Vec3::new(0.0, -50.0, 0.0),
            direction: Dir3::Y,
        };
        assert!(floor().raycast_mesh(from_below).is_some());
    }

    #[test]
    fn plane_extends_past_the_floor() {
        let point = floor().raycast_plane(down_from(90.0, -120.0)).unwrap();
        assert!(point.abs_diff_eq(Vec3::new(90.0, 0.0, -120.0), 1e-4));
    }

    #[test]
    fn footprint_containment() {
        let floor = floor();
        assert!(floor.contains(37.5, -37.5));
        assert!(!floor.contains(37.6, 0.0));
    }
}
