use constants::wander::{
    COLLISION_TIMER_MAX, COLLISION_TIMER_MIN, HEADING_TIMER_MAX, HEADING_TIMER_MIN, INITIAL_TIMER,
    TIMER_RATE, TURN_MAX_DEGREES, TURN_MIN_DEGREES, TURN_RATE, WANDER_SPEED,
};
use rand::Rng;

use super::cube::CubeBody;
use super::obb::Obb;
use super::time::FrameTime;

/// What a cube can see of the world while deciding how to move.
#[derive(Debug, Clone, Copy)]
pub struct Surroundings<'a> {
    pub floor_size: f32,
    /// Boxes of every other cube.
    pub others: &'a [Obb],
}

/// Per-frame behaviour of a free cube.
pub trait Behavior {
    fn advance<R: Rng>(
        &mut self,
        body: &mut CubeBody,
        time: FrameTime,
        surroundings: &Surroundings<'_>,
        rng: &mut R,
    );
}

/// Wandering: walk forward, turn toward a random heading every so often and
/// hurry the next decision after bumping into a neighbour.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleState {
    heading: Option<f32>,
    timer: f32,
}

impl Default for IdleState {
    fn default() -> Self {
        Self {
            heading: None,
            timer: INITIAL_TIMER,
        }
    }
}

impl IdleState {
    /// Target yaw the cube is turning toward.
    pub fn heading(&self) -> Option<f32> {
        self.heading
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Picks a heading 30-90 degrees to either side of `yaw` and restarts the countdown.
    pub fn face_new_direction<R: Rng>(&mut self, yaw: f32, floor_size: f32, rng: &mut R) {
        let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let turn = rng.random_range(TURN_MIN_DEGREES..TURN_MAX_DEGREES).to_radians();
        self.heading = Some(yaw + sign * turn);
        self.timer = rng.random_range(floor_size * HEADING_TIMER_MIN..floor_size * HEADING_TIMER_MAX);
    }

    /// Restarts the countdown after a collision. The heading is left alone.
    pub fn face_opposite_direction<R: Rng>(&mut self, floor_size: f32, rng: &mut R) {
        self.timer =
            rng.random_range(floor_size * COLLISION_TIMER_MIN..floor_size * COLLISION_TIMER_MAX);
    }
}

impl Behavior for IdleState {
    fn advance<R: Rng>(
        &mut self,
        body: &mut CubeBody,
        time: FrameTime,
        surroundings: &Surroundings<'_>,
        rng: &mut R,
    ) {
        body.move_forward(WANDER_SPEED * time.delta);
        body.wobble(time.elapsed);

        self.timer -= TIMER_RATE * time.delta;
        if self.timer < 0.0 {
            self.face_new_direction(body.yaw, surroundings.floor_size, rng);
        } else if body.intersects_with(surroundings.others) {
            self.face_opposite_direction(surroundings.floor_size, rng);
        }

        if let Some(heading) = self.heading {
            body.yaw = turn_toward(body.yaw, heading, TURN_RATE * time.delta);
        }
    }
}

/// Steps `yaw` toward `target` by at most `step`, landing exactly on the target.
pub fn turn_toward(yaw: f32, target: f32, step: f32) -> f32 {
    if yaw > target {
        (yaw - step).max(target)
    } else if yaw < target {
        (yaw + step).min(target)
    } else {
        yaw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use constants::cube::REGULAR;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FRAME: FrameTime = FrameTime {
        delta: 1.0 / 60.0,
        elapsed: 0.0,
    };

    fn lonely() -> Surroundings<'static> {
        Surroundings {
            floor_size: 75.0,
            others: &[],
        }
    }

    #[test]
    fn first_frame_picks_a_heading() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = IdleState::default();
        let mut body = CubeBody::new(Vec3::ZERO, 0.0, REGULAR);

        state.advance(&mut body, FRAME, &lonely(), &mut rng);

        let heading = state.heading().expect("expired timer picks a heading");
        let turn = heading.abs().to_degrees();
        assert!(turn > 29.99 && turn < 90.01, "turned {turn} degrees");
        assert!((75.0 * 0.15..75.0 * 0.5).contains(&state.timer()));
    }

    #[test]
    fn heading_changes_stay_within_a_right_angle_of_current_yaw() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = IdleState::default();
        for yaw in [-3.0f32, 0.0, 0.5, 12.0] {
            for _ in 0..50 {
                state.face_new_direction(yaw, 75.0, &mut rng);
                let delta = (state.heading().unwrap() - yaw).abs();
                assert!(delta <= 90f32.to_radians() + 1e-5);
                assert!(delta >= 30f32.to_radians() - 1e-5);
            }
        }
    }

    #[test]
    fn collision_only_restarts_the_timer() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = IdleState {
            heading: Some(1.0),
            timer: 5.0,
        };
        let mut body = CubeBody::new(Vec3::ZERO, 0.0, REGULAR);
        let neighbour = [Obb::cube(Vec3::new(6.0, 0.0, 0.0), 0.0, 10.0)];
        let crowded = Surroundings {
            floor_size: 75.0,
            others: &neighbour,
        };

        state.advance(&mut body, FRAME, &crowded, &mut rng);

        assert_eq!(state.heading(), Some(1.0));
        assert!((75.0 * 0.15..75.0 * 0.75).contains(&state.timer()));
    }

    #[test]
    fn no_collision_just_counts_down() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = IdleState {
            heading: Some(1.0),
            timer: 5.0,
        };
        let mut body = CubeBody::new(Vec3::ZERO, 0.0, REGULAR);

        state.advance(&mut body, FRAME, &lonely(), &mut rng);

        assert!((state.timer() - (5.0 - 10.0 / 60.0)).abs() < 1e-5);
        assert_eq!(state.heading(), Some(1.0));
    }

    #[test]
    fn walks_forward_along_local_z() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = IdleState {
            heading: None,
            timer: 100.0,
        };
        let yaw = std::f32::consts::FRAC_PI_2;
        let mut body = CubeBody::new(Vec3::ZERO, yaw, REGULAR);
        let second = FrameTime::new(1.0, 1.0);

        state.advance(&mut body, second, &lonely(), &mut rng);

        assert!(body.translation.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
        assert_eq!(body.yaw, yaw);
    }

    #[test]
    fn turning_converges_without_overshoot() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = IdleState {
            heading: Some(1.2),
            timer: 1000.0,
        };
        let mut body = CubeBody::new(Vec3::ZERO, 0.0, REGULAR);

        let mut gap = (1.2f32 - body.yaw).abs();
        for _ in 0..120 {
            state.advance(&mut body, FRAME, &lonely(), &mut rng);
            let next_gap = (1.2f32 - body.yaw).abs();
            assert!(next_gap <= gap);
            assert!(body.yaw <= 1.2);
            gap = next_gap;
        }
        assert_eq!(body.yaw, 1.2);
    }

    #[test]
    fn turn_toward_snaps_on_overshoot() {
        assert_eq!(turn_toward(0.0, 0.1, 0.5), 0.1);
        assert_eq!(turn_toward(0.0, -0.1, 0.5), -0.1);
        assert_eq!(turn_toward(0.0, 1.0, 0.25), 0.25);
        assert_eq!(turn_toward(0.3, 0.3, 0.25), 0.3);
    }
}
