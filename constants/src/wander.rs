/// Forward speed of a wandering cube, in units per second.
pub const WANDER_SPEED: f32 = 5.0;

/// Angular speed while turning toward a new heading, in radians per second.
pub const TURN_RATE: f32 = 2.5;

/// Countdown units consumed per second.
pub const TIMER_RATE: f32 = 10.0;

/// Timer value of a fresh idle state. Negative so the first frame picks a heading.
pub const INITIAL_TIMER: f32 = -1.0;

/// Turn angle range in degrees, applied with a random sign.
pub const TURN_MIN_DEGREES: f32 = 30.0;
pub const TURN_MAX_DEGREES: f32 = 90.0;

/// Timer range after a heading change, as fractions of the floor size.
pub const HEADING_TIMER_MIN: f32 = 0.15;
pub const HEADING_TIMER_MAX: f32 = 0.5;

/// Timer range after bumping into another cube, as fractions of the floor size.
pub const COLLISION_TIMER_MIN: f32 = 0.15;
pub const COLLISION_TIMER_MAX: f32 = 0.75;
