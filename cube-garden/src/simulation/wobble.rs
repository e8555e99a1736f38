use bevy::math::Vec3;
use constants::cube::WOBBLE_SCALE;

/// Ripple coefficient at `elapsed` seconds. Peaks at time zero.
pub fn wobbliness(elapsed: f32, speed: f32, range: f32) -> f32 {
    (elapsed * speed).cos() * range / WOBBLE_SCALE
}

/// Shears each vertex along X by the square of its height, anchored at the cube's centre.
/// Always derived from the undeformed positions so the ripple never accumulates.
pub fn apply_wobble(base: &[[f32; 3]], wobbliness: f32) -> Vec<[f32; 3]> {
    base.iter()
        .map(|&[x, y, z]| [x + y * y * wobbliness, y, z])
        .collect()
}

/// Vertex data of a segmented box, ready to be turned into a triangle-list mesh.
#[derive(Debug, Clone, Default)]
pub struct CubeGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

/// Box of edge `size` whose four side faces are split into `height_segments`
/// horizontal bands. Top and bottom faces are a single quad.
pub fn segmented_cube(size: f32, height_segments: u32) -> CubeGeometry {
    let height_segments = height_segments.max(1);
    let mut geometry = CubeGeometry::default();

    // (normal, u axis, v axis, v segments) with u x v == normal so quads wind outward.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y, height_segments),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y, height_segments),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z, 1),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z, 1),
        (Vec3::Z, Vec3::X, Vec3::Y, height_segments),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y, height_segments),
    ];

    for (normal, u, v, v_segments) in faces {
        push_face(&mut geometry, size, normal, u, v, v_segments);
    }

    geometry
}

fn push_face(geometry: &mut CubeGeometry, size: f32, normal: Vec3, u: Vec3, v: Vec3, v_segments: u32) {
    let first = geometry.positions.len() as u32;
    let half = size * 0.5;

    for iy in 0..=v_segments {
        let fv = iy as f32 / v_segments as f32;
        for ix in 0..=1u32 {
            let fu = ix as f32;
            let position = normal * half + u * (fu - 0.5) * size + v * (fv - 0.5) * size;
            geometry.positions.push(position.to_array());
            geometry.normals.push(normal.to_array());
            geometry.uvs.push([fu, 1.0 - fv]);
        }
    }

    for iy in 0..v_segments {
        let a = first + iy * 2;
        let b = a + 1;
        let c = b + 2;
        let d = a + 2;
        geometry.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn wobble_peaks_at_time_zero() {
        assert_eq!(wobbliness(0.0, 5.0, 5.0), 0.05);
    }

    #[test]
    fn wobble_repeats_with_its_angular_speed() {
        let speed = 5.0;
        let period = TAU / speed;
        for t in [0.1, 0.7, 2.3] {
            let now = wobbliness(t, speed, 5.0);
            let later = wobbliness(t + period, speed, 5.0);
            assert!((now - later).abs() < 1e-5, "t = {t}");
        }
        assert!((wobbliness(period / 2.0, speed, 5.0) + 0.05).abs() < 1e-6);
    }

    #[test]
    fn wobble_shears_by_height_squared() {
        let base = [[0.0, 0.0, 1.0], [1.0, 2.0, 0.0], [-1.0, -3.0, 0.0]];
        let rippled = apply_wobble(&base, 0.1);

        assert_eq!(rippled[0], [0.0, 0.0, 1.0]);
        assert!((rippled[1][0] - 1.4).abs() < 1e-6);
        assert!((rippled[2][0] + 0.1).abs() < 1e-6);
        assert_eq!(rippled[2][1], -3.0);
    }

    #[test]
    fn wobble_does_not_accumulate() {
        let base = segmented_cube(10.0, 4).positions;
        let once = apply_wobble(&base, 0.05);
        let reset = apply_wobble(&base, 0.0);
        assert_ne!(once, base);
        assert_eq!(reset, base);
    }

    #[test]
    fn segmented_cube_layout() {
        let geometry = segmented_cube(10.0, 15);

        // Four banded sides plus two single-quad caps.
        assert_eq!(geometry.positions.len(), 4 * 2 * 16 + 2 * 4);
        assert_eq!(geometry.indices.len(), (4 * 15 + 2) * 6);
        assert_eq!(geometry.normals.len(), geometry.positions.len());
        assert_eq!(geometry.uvs.len(), geometry.positions.len());

        for p in &geometry.positions {
            let max = p.iter().fold(0.0f32, |m, c| m.max(c.abs()));
            assert!((max - 5.0).abs() < 1e-5, "{p:?} is off the surface");
        }
    }

    #[test]
    fn segmented_cube_faces_wind_outward() {
        let geometry = segmented_cube(2.0, 3);
        for triangle in geometry.indices.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from(geometry.positions[triangle[i] as usize]));
            let face_normal = (b - a).cross(c - a).normalize();
            let expected = Vec3::from(geometry.normals[triangle[0] as usize]);
            assert!(face_normal.abs_diff_eq(expected, 1e-5));
        }
    }
}
