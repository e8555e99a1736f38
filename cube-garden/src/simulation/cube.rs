use bevy::math::{Quat, Vec2, Vec3};
use bevy::prelude::Component;
use constants::cube::{CubeProfile, REGULAR, REST_HEIGHT, ROBOT, TOFU};
use rand::Rng;
use serde::Deserialize;

use super::idle::{Behavior, IdleState, Surroundings};
use super::obb::Obb;
use super::time::FrameTime;
use super::wobble::wobbliness;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeKind {
    #[default]
    Regular,
    Tofu,
    Robot,
}

impl CubeKind {
    pub fn profile(self) -> CubeProfile {
        match self {
            CubeKind::Regular => REGULAR,
            CubeKind::Tofu => TOFU,
            CubeKind::Robot => ROBOT,
        }
    }
}

/// Placement and surface state of a cube. Only the cube's behaviour and the
/// hand write to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeBody {
    pub translation: Vec3,
    /// Rotation about the vertical axis, in radians. Unbounded.
    pub yaw: f32,
    pub profile: CubeProfile,
    /// Current ripple coefficient, recomputed from the clock each frame.
    pub wobbliness: f32,
}

impl CubeBody {
    pub fn new(translation: Vec3, yaw: f32, profile: CubeProfile) -> Self {
        Self {
            translation,
            yaw,
            profile,
            wobbliness: 0.0,
        }
    }

    pub fn size(&self) -> f32 {
        self.profile.size
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Local +Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.translation += self.forward() * distance;
    }

    pub fn wobble(&mut self, elapsed: f32) {
        self.wobbliness = wobbliness(elapsed, self.profile.wobble_speed, self.profile.wobble_range);
    }

    pub fn obb(&self) -> Obb {
        Obb::cube(self.translation, self.yaw, self.size())
    }

    /// True when this body overlaps any of `others`.
    pub fn intersects_with(&self, others: &[Obb]) -> bool {
        let own = self.obb();
        others.iter().any(|other| own.intersects_obb(other))
    }
}

#[derive(Component, Debug, Clone)]
pub struct Cube {
    name: String,
    kind: CubeKind,
    pub body: CubeBody,
    grabbed: bool,
    state: IdleState,
}

impl Cube {
    /// A cube resting on the ground at horizontal `position` (x, z).
    pub fn new(name: impl Into<String>, kind: CubeKind, position: Vec2, yaw: f32) -> Self {
        let translation = Vec3::new(position.x, REST_HEIGHT, position.y);
        Self {
            name: name.into(),
            kind,
            body: CubeBody::new(translation, yaw, kind.profile()),
            grabbed: false,
            state: IdleState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CubeKind {
        self.kind
    }

    pub fn size(&self) -> f32 {
        self.body.size()
    }

    pub fn state(&self) -> &IdleState {
        &self.state
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn set_grabbed(&mut self, grabbed: bool) {
        self.grabbed = grabbed;
    }

    pub fn obb(&self) -> Obb {
        self.body.obb()
    }

    pub fn intersects_with(&self, others: &[Obb]) -> bool {
        self.body.intersects_with(others)
    }

    /// Runs the cube's behaviour for one frame. A held cube stays where the hand put it.
    pub fn update<R: Rng>(&mut self, time: FrameTime, surroundings: &Surroundings<'_>, rng: &mut R) {
        if self.grabbed {
            return;
        }
        self.state.advance(&mut self.body, time, surroundings, rng);
    }
}
