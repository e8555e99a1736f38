use bevy::math::{Ray3d, Vec3};

use super::obb::Obb;

/// Where a ray met a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    /// Outward normal of the face that was hit, in the box's local frame.
    pub local_normal: Vec3,
    /// Same normal in world space.
    pub normal: Vec3,
}

/// Casts `ray` against an oriented box by moving the ray into box-local space.
pub fn ray_hits_obb(ray: Ray3d, obb: &Obb) -> Option<RayHit> {
    let to_local = obb.rotation.transpose();
    let origin = to_local * (ray.origin - obb.center);
    let direction = to_local * ray.direction.as_vec3();

    let (distance, local_normal) = ray_aabb_hit(origin, direction, -obb.half_size, obb.half_size)?;
    Some(RayHit {
        distance,
        point: ray.get_point(distance),
        local_normal,
        normal: obb.rotation * local_normal,
    })
}

// Slab-method ray–AABB intersection, returns the hit distance and the face normal.
// A ray starting inside the box reports the face it leaves through.
pub fn ray_aabb_hit(
    ray_origin: Vec3,
    ray_direction: Vec3,
    min: Vec3,
    max: Vec3,
) -> Option<(f32, Vec3)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_normal = Vec3::ZERO;
    let mut exit_normal = Vec3::ZERO;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: either always inside it or never.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t_near, mut t_far) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        let mut face = Vec3::ZERO;
        face[axis] = -direction.signum();

        if t_near > t_enter {
            t_enter = t_near;
            enter_normal = face;
        }
        if t_far < t_exit {
            t_exit = t_far;
            exit_normal = -face;
        }
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    if t_enter >= 0.0 {
        Some((t_enter, enter_normal))
    } else {
        Some((t_exit, exit_normal))
    }
}

/// Distance along `ray` to the horizontal plane at height `y`.
/// `None` when the ray runs parallel to the plane or points away from it.
pub fn ray_hits_horizontal_plane(ray: Ray3d, y: f32) -> Option<f32> {
    let dy = ray.direction.y;
    if dy.abs() < f32::EPSILON {
        return None;
    }
    let t = (y - ray.origin.y) / dy;
    (t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Dir3;

    fn down_from(x: f32, z: f32) -> Ray3d {
        Ray3d {
            origin: Vec3::new(x, 50.0, z),
            direction: Dir3::NEG_Y,
        }
    }

    #[test]
    fn vertical_ray_hits_top_face() {
        let obb = Obb::cube(Vec3::ZERO, 0.0, 10.0);
        let hit = ray_hits_obb(down_from(1.0, -2.0), &obb).expect("ray should hit the cube");

        assert!((hit.distance - 45.0).abs() < 1e-4);
        assert!(hit.point.abs_diff_eq(Vec3::new(1.0, 5.0, -2.0), 1e-4));
        assert_eq!(hit.local_normal, Vec3::Y);
        assert!(hit.normal.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn ray_beside_the_box_misses() {
        let obb = Obb::cube(Vec3::ZERO, 0.0, 10.0);
        assert!(ray_hits_obb(down_from(5.5, 0.0), &obb).is_none());
    }

    #[test]
    fn rotated_box_reports_world_normal() {
        let obb = Obb::cube(Vec3::ZERO, std::f32::consts::FRAC_PI_4, 10.0);
        let ray = Ray3d {
            origin: Vec3::new(-50.0, 0.0, 0.0),
            direction: Dir3::X,
        };
        let hit = ray_hits_obb(ray, &obb).expect("ray through the centre must hit");

        // A corner points at the ray, so the hit lands at half the diagonal.
        assert!((hit.point.x + 5.0 * std::f32::consts::SQRT_2).abs() < 1e-3);
        assert!(hit.normal.x < 0.0);
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ray_starting_inside_reports_exit_face() {
        let (t, normal) =
            ray_aabb_hit(Vec3::ZERO, Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();
        assert_eq!(t, 1.0);
        assert_eq!(normal, Vec3::Z);
    }

    #[test]
    fn box_behind_the_ray_is_ignored() {
        assert!(ray_aabb_hit(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn horizontal_plane_intersections() {
        assert_eq!(ray_hits_horizontal_plane(down_from(0.0, 0.0), 0.0), Some(50.0));

        let level = Ray3d {
            origin: Vec3::new(0.0, 10.0, 0.0),
            direction: Dir3::X,
        };
        assert_eq!(ray_hits_horizontal_plane(level, 0.0), None);

        let up = Ray3d {
            origin: Vec3::new(0.0, 10.0, 0.0),
            direction: Dir3::Y,
        };
        assert_eq!(ray_hits_horizontal_plane(up, 0.0), None);
    }
}
