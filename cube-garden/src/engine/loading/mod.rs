//! Startup loading of the playground settings.
//!
//! The settings file is the only asset the garden reads. Nothing is spawned
//! until it has arrived and passed validation.

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Settings asset request, failure handling and validation.
///
/// Inserts the settings, floor and camera resources once the file resolves.
pub mod settings_loader;
