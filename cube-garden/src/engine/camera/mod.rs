//! Orbit camera around the centre of the floor.
//!
//! Secondary button drags orbit, the wheel zooms; the primary button is left
//! to the hand.

/// Orbit camera resource and controller system.
pub mod orbit_camera;
