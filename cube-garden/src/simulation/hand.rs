use bevy::math::{Quat, Ray3d, Vec2, Vec3};
use bevy::prelude::{Entity, Resource, Transform, info};
use constants::cube::{GRAB_LIFT, REST_HEIGHT};
use constants::hand::{HAND_DRAG_OFFSET, HEART_SPAWN_DISTANCE};

use super::cube::Cube;
use super::floor::{Boundary, Floor, RailAxis};
use super::heart::{Heart, heart_scale};
use super::pointer::{PointerButton, PointerEvent, PointerProjector};
use super::ray::{RayHit, ray_hits_obb};
use super::time::FrameTime;

/// A cube the hand can reach this frame.
pub type CubeSlot<'a> = (Entity, &'a mut Cube);

/// Which hand model is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grip {
    #[default]
    Open,
    /// Holding a cube. Drawn on top of the scene.
    Grabbing,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub visible: bool,
}

/// Pointer-driven hand: hovers over cubes, pets them, picks one up and drags it
/// around the floor.
#[derive(Resource, Debug, Default)]
pub struct HandController {
    pointer: Option<Vec2>,
    grabbed: Option<Entity>,
    previous_point: Option<Vec3>,
    pointer_moved: bool,
    distance_accumulator: f32,
    pose: HandPose,
    grip: Grip,
    cursor_hidden: bool,
    hearts: Vec<Heart>,
    next_heart_id: u64,
}

impl HandController {
    pub fn pose(&self) -> HandPose {
        self.pose
    }

    pub fn grip(&self) -> Grip {
        self.grip
    }

    pub fn grabbed(&self) -> Option<Entity> {
        self.grabbed
    }

    /// Whether the system cursor should be hidden behind the hand.
    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Applies one queued pointer event.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        projector: &impl PointerProjector,
        cubes: &mut [CubeSlot<'_>],
        floor: &Floor,
    ) {
        match event {
            PointerEvent::Down {
                button: PointerButton::Primary,
                ndc,
            } => {
                self.pointer = Some(ndc);
                if let Some(ray) = projector.ray_through(ndc) {
                    self.grab(ray, cubes);
                }
            }
            PointerEvent::Down { ndc, .. } => self.pointer = Some(ndc),
            PointerEvent::Move { ndc } => {
                self.pointer = Some(ndc);
                self.pointer_moved = true;
                let Some(ray) = projector.ray_through(ndc) else {
                    return;
                };
                match self.grabbed {
                    Some(entity) => self.drag(entity, ray, projector.eye(), cubes, floor),
                    None => self.hover(ray, cubes),
                }
            }
            PointerEvent::Up { .. } => self.release(cubes),
        }
    }

    /// Per-frame bookkeeping after the queued events have been applied.
    pub fn update(&mut self, time: FrameTime, projector: &impl PointerProjector, cubes: &[CubeSlot<'_>]) {
        if self.grabbed.is_none() {
            if let Some(ndc) = self.pointer {
                let ray = projector.ray_through(ndc);
                self.rest_on(ray, cubes);
            }
        }

        if !self.pointer_moved {
            if let Some(previous) = self.previous_point {
                self.distance_accumulator = previous.distance(self.pose.translation);
            }
        }
        self.pointer_moved = false;

        self.hearts.retain_mut(|heart| heart.advance(time.delta));
    }

    fn grab(&mut self, ray: Ray3d, cubes: &mut [CubeSlot<'_>]) {
        if self.grabbed.is_some() {
            return;
        }
        let Some((index, _)) = nearest_hit(ray, cubes) else {
            return;
        };

        let (entity, cube) = &mut cubes[index];
        cube.set_grabbed(true);
        self.grabbed = Some(*entity);
        self.grip = Grip::Grabbing;
        self.pose.visible = true;
        info!("Picked up cube '{}'", cube.name());
    }

    fn release(&mut self, cubes: &mut [CubeSlot<'_>]) {
        self.grip = Grip::Open;
        let Some(entity) = self.grabbed.take() else {
            return;
        };
        if let Some((_, cube)) = cubes.iter_mut().find(|(e, _)| *e == entity) {
            cube.body.translation.y = REST_HEIGHT;
            cube.set_grabbed(false);
            info!("Put down cube '{}'", cube.name());
        }
    }

    fn drag(&mut self, entity: Entity, ray: Ray3d, eye: Vec3, cubes: &mut [CubeSlot<'_>], floor: &Floor) {
        let Some((_, cube)) = cubes.iter_mut().find(|(e, _)| *e == entity) else {
            self.grabbed = None;
            self.grip = Grip::Open;
            return;
        };

        if let Some(hit) = floor.raycast_mesh(ray) {
            cube.body.translation = Vec3::new(hit.x, GRAB_LIFT, hit.z);
            let hand = Vec3::new(hit.x, hit.y + cube.size() * 0.5 + HAND_DRAG_OFFSET, hit.z);
            self.pose.translation = hand;
            self.pose.rotation = looking_at(hand, eye);
            return;
        }

        // Past the floor's footprint: slide along the edge the cube is touching.
        let Some(point) = floor.raycast_plane(ray) else {
            return;
        };
        match floor.crossed_by(&cube.obb()).and_then(Boundary::rail) {
            Some(RailAxis::X) => {
                cube.body.translation.x = point.x;
                self.pose.translation.x = point.x;
            }
            Some(RailAxis::Z) => {
                cube.body.translation.z = point.z;
                self.pose.translation.z = point.z;
            }
            None => return,
        }
        self.pose.rotation = looking_at(self.pose.translation, eye);
    }

    fn hover(&mut self, ray: Ray3d, cubes: &[CubeSlot<'_>]) {
        let Some((_, hit)) = nearest_hit(ray, cubes) else {
            return;
        };

        if let Some(previous) = self.previous_point {
            let travelled = previous.distance(hit.point) - self.distance_accumulator;
            if travelled > HEART_SPAWN_DISTANCE {
                self.spawn_heart(&hit, travelled);
            }
            self.distance_accumulator = 0.0;
        }
        self.previous_point = Some(hit.point);
    }

    fn spawn_heart(&mut self, hit: &RayHit, travelled: f32) {
        // Hearts on a top face stay upright.
        let rotation = if hit.local_normal == Vec3::Y {
            Quat::IDENTITY
        } else {
            looking_at(hit.point, hit.point + hit.normal)
        };
        self.hearts.push(Heart::new(
            self.next_heart_id,
            hit.point,
            rotation,
            heart_scale(travelled),
        ));
        self.next_heart_id += 1;
    }

    fn rest_on(&mut self, ray: Option<Ray3d>, cubes: &[CubeSlot<'_>]) {
        match ray.and_then(|ray| nearest_hit(ray, cubes)) {
            Some((_, hit)) => {
                self.pose = HandPose {
                    translation: hit.point,
                    rotation: looking_at(hit.point, hit.point + hit.normal),
                    visible: true,
                };
                self.cursor_hidden = true;
            }
            None => {
                self.pose.visible = false;
                self.cursor_hidden = false;
            }
        }
    }
}

/// Closest cube along `ray`, as an index into `cubes`.
fn nearest_hit(ray: Ray3d, cubes: &[CubeSlot<'_>]) -> Option<(usize, RayHit)> {
    cubes
        .iter()
        .enumerate()
        .filter_map(|(index, (_, cube))| ray_hits_obb(ray, &cube.obb()).map(|hit| (index, hit)))
        .min_by(|a, b| a.1.distance.total_cmp(&b.1.distance))
}

/// Rotation pointing local +Z from `position` toward `target`.
pub fn looking_at(position: Vec3, target: Vec3) -> Quat {
    Transform::from_translation(position)
        .looking_to(position - target, Vec3::Y)
        .rotation
}
