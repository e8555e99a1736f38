//! Bevy binding of the garden.
//!
//! Turns window input into queued pointer events, runs the simulation once per
//! frame and mirrors its state onto meshes, materials, labels and the cursor.

pub mod camera;
pub mod core;
pub mod input;
pub mod loading;
pub mod scene;
pub mod systems;
