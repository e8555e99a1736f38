//! Pointer input plumbing.
//!
//! Window events are turned into [`PointerEvent`](crate::simulation::pointer::PointerEvent)s
//! in arrival order and queued until the hand drains them once per frame.

/// Camera-backed pointer projector.
pub mod projector;

/// Ordered pointer event queue and the system that fills it.
pub mod queue;
