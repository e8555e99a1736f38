//! Shared tuning values for the cube garden.
//!
//! Everything the simulation treats as a fixed rate or size lives here so the
//! runtime settings file only has to carry the scene layout.

pub mod cube;
pub mod floor;
pub mod hand;
pub mod render_settings;
pub mod wander;
