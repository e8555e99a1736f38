use bevy::math::{Quat, Vec3};
use constants::hand::{HEART_FADE_RATE, HEART_MAX_SCALE, HEART_RISE_SPEED, HEART_SCALE_DIVISOR};

/// A heart left behind by petting a cube. Drifts up and fades out.
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    id: u64,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub opacity: f32,
}

impl Heart {
    pub fn new(id: u64, translation: Vec3, rotation: Quat, scale: f32) -> Self {
        Self {
            id,
            translation,
            rotation,
            scale,
            opacity: 1.0,
        }
    }

    /// Stable identity used to pair the heart with its rendered entity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Moves the heart one frame on. Returns false once it has faded past zero.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.translation.y += HEART_RISE_SPEED * delta;
        self.opacity -= HEART_FADE_RATE * delta;
        self.opacity >= 0.0
    }
}

/// Uniform scale of a heart spawned after the pointer travelled `distance`.
pub fn heart_scale(distance: f32) -> f32 {
    (distance / HEART_SCALE_DIVISOR).min(HEART_MAX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_to_exactly_zero_then_dies() {
        let mut heart = Heart::new(0, Vec3::ZERO, Quat::IDENTITY, 0.5);
        for _ in 0..4 {
            assert!(heart.advance(0.25));
        }
        assert_eq!(heart.opacity, 0.0);
        assert_eq!(heart.translation.y, 10.0);

        assert!(!heart.advance(0.25));
        assert!(heart.opacity < 0.0);
    }

    #[test]
    fn scale_grows_with_distance_up_to_a_cap() {
        assert_eq!(heart_scale(2.0), 0.5);
        assert_eq!(heart_scale(3.0), 0.75);
        assert_eq!(heart_scale(40.0), 0.75);
    }
}
