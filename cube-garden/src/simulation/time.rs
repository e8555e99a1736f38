use bevy::prelude::*;

/// Clock sample handed to every per-frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since startup.
    pub elapsed: f32,
}

impl FrameTime {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }
}

impl From<&Time> for FrameTime {
    fn from(time: &Time) -> Self {
        Self::new(time.delta_secs(), time.elapsed_secs())
    }
}
