use bevy::math::{Mat3, Ray3d, Vec3};

use super::ray::ray_hits_obb;

// Added to every rotation term so near-parallel edge pairs do not produce a
// degenerate cross-product axis that wrongly separates the boxes.
const PARALLEL_EPSILON: f32 = 1e-3;

/// Oriented bounding box: centre, half extents along each local axis and the
/// rotation that maps local axes into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    pub center: Vec3,
    pub half_size: Vec3,
    pub rotation: Mat3,
}

impl Obb {
    pub fn new(center: Vec3, half_size: Vec3, rotation: Mat3) -> Self {
        Self {
            center,
            half_size,
            rotation,
        }
    }

    /// Box of a cube with edge `size`, rotated `yaw` radians about the vertical axis.
    pub fn cube(center: Vec3, yaw: f32, size: f32) -> Self {
        Self::new(center, Vec3::splat(size * 0.5), Mat3::from_rotation_y(yaw))
    }

    /// Separating axis test against another box. Touching faces count as overlap.
    pub fn intersects_obb(&self, other: &Obb) -> bool {
        let a = [self.rotation.x_axis, self.rotation.y_axis, self.rotation.z_axis];
        let b = [other.rotation.x_axis, other.rotation.y_axis, other.rotation.z_axis];
        let ea = self.half_size;
        let eb = other.half_size;

        // Rotation expressing `other` in this box's frame.
        let mut r = [[0.0f32; 3]; 3];
        let mut abs_r = [[0.0f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                r[i][j] = a[i].dot(b[j]);
                abs_r[i][j] = r[i][j].abs() + PARALLEL_EPSILON;
            }
        }

        let offset = other.center - self.center;
        let t = Vec3::new(offset.dot(a[0]), offset.dot(a[1]), offset.dot(a[2]));

        // Face axes of this box.
        for i in 0..3 {
            let rb = eb[0] * abs_r[i][0] + eb[1] * abs_r[i][1] + eb[2] * abs_r[i][2];
            if t[i].abs() > ea[i] + rb {
                return false;
            }
        }

        // Face axes of the other box.
        for j in 0..3 {
            let ra = ea[0] * abs_r[0][j] + ea[1] * abs_r[1][j] + ea[2] * abs_r[2][j];
            let distance = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
            if distance.abs() > ra + eb[j] {
                return false;
            }
        }

        // Edge-edge axes a[i] x b[j].
        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let ra = ea[i1] * abs_r[i2][j] + ea[i2] * abs_r[i1][j];
                let rb = eb[j1] * abs_r[i][j2] + eb[j2] * abs_r[i][j1];
                let distance = t[i2] * r[i1][j] - t[i1] * r[i2][j];
                if distance.abs() > ra + rb {
                    return false;
                }
            }
        }

        true
    }

    pub fn intersects_ray(&self, ray: Ray3d) -> bool {
        ray_hits_obb(ray, self).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn overlapping_cubes_intersect() {
        let a = Obb::cube(Vec3::ZERO, 0.0, 10.0);
        let b = Obb::cube(Vec3::new(8.0, 0.0, 3.0), 0.3, 10.0);
        assert!(a.intersects_obb(&b));
        assert!(b.intersects_obb(&a));
    }

    #[test]
    fn distant_cubes_are_separate() {
        let a = Obb::cube(Vec3::ZERO, 0.0, 10.0);
        let b = Obb::cube(Vec3::new(20.0, 0.0, 0.0), 0.0, 10.0);
        assert!(!a.intersects_obb(&b));
    }

    #[test]
    fn touching_faces_count_as_overlap() {
        let a = Obb::cube(Vec3::ZERO, 0.0, 10.0);
        let b = Obb::cube(Vec3::new(10.0, 0.0, 0.0), 0.0, 10.0);
        assert!(a.intersects_obb(&b));
    }

    #[test]
    fn rotation_separates_boxes_whose_aabbs_overlap() {
        // Two diamonds facing each other flat side to flat side.
        let a = Obb::cube(Vec3::ZERO, FRAC_PI_4, 10.0);
        let b = Obb::cube(Vec3::new(7.5, 0.0, 7.5), FRAC_PI_4, 10.0);
        assert!(!a.intersects_obb(&b));

        let axis_aligned = Obb::cube(Vec3::new(7.5, 0.0, 7.5), 0.0, 10.0);
        assert!(a.intersects_obb(&axis_aligned));
    }

    #[test]
    fn corner_reaches_further_than_face() {
        let diamond = Obb::cube(Vec3::ZERO, FRAC_PI_4, 10.0);
        let neighbour = Obb::cube(Vec3::new(11.5, 0.0, 0.0), 0.0, 10.0);
        let square = Obb::cube(Vec3::ZERO, 0.0, 10.0);

        assert!(diamond.intersects_obb(&neighbour));
        assert!(!square.intersects_obb(&neighbour));
    }

    #[test]
    fn ray_through_box() {
        let obb = Obb::cube(Vec3::new(0.0, 0.0, 20.0), 0.0, 10.0);
        let along_z = Ray3d {
            origin: Vec3::ZERO,
            direction: bevy::math::Dir3::Z,
        };
        let along_x = Ray3d {
            origin: Vec3::ZERO,
            direction: bevy::math::Dir3::X,
        };
        assert!(obb.intersects_ray(along_z));
        assert!(!obb.intersects_ray(along_x));
    }
}
