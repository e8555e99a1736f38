//! Runtime diagnostics.

/// FPS overlay for native builds.
pub mod fps_tracking;
