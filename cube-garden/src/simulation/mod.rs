//! Interaction and behaviour core of the garden.
//!
//! Nothing in here touches the renderer: types use Bevy's math and ECS derives
//! only, so every rule can be exercised without a window or an `App`.
//!
//! ## Frame Flow
//!
//! ```text
//! pointer events (queued) ──> HandController::handle()
//!                               ├─> hover: nearest cube hit, heart spawning
//!                               ├─> grab / release: Cube::set_grabbed()
//!                               └─> drag: Floor::raycast_mesh() / rail via Floor::crossed_by()
//! HandController::update()   ──> resting pose, hover accumulator, heart fade
//! Cube::update()             ──> IdleState (wander, wobble, turn), skipped while grabbed
//! ```

/// Cube entity: kind, body transform, grab flag and its behaviour state.
pub mod cube;

/// Bounded floor, its edge rays and the pointer planes.
pub mod floor;

/// Pointer-driven hand: hover, grab, drag, release and heart spawning.
pub mod hand;

/// Fading heart particles.
pub mod heart;

/// Per-cube wandering state machine.
pub mod idle;

/// Oriented bounding boxes and the separating axis test.
pub mod obb;

/// Pointer events, screen normalisation and the pointer-to-ray seam.
pub mod pointer;

/// Ray intersection helpers.
pub mod ray;

/// Per-frame clock sample.
pub mod time;

/// Surface ripple of the cubes and the segmented cube geometry it deforms.
pub mod wobble;
