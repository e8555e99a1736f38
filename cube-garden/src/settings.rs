use std::collections::HashSet;

use bevy::prelude::*;
use constants::floor::FLOOR_SIZE;
use constants::render_settings::{DEFAULT_CAMERA_DISTANCE, DEFAULT_CAMERA_PITCH};
use serde::Deserialize;
use thiserror::Error;

use crate::simulation::cube::CubeKind;

pub const SETTINGS_PATH: &str = "playground.json";

/// Scene layout and toggles, read once from `assets/playground.json`.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundSettings {
    pub floor_size: f32,
    pub camera_distance: f32,
    /// Radians; negative looks down.
    pub camera_pitch: f32,
    pub show_boundaries: bool,
    pub show_labels: bool,
    pub cubes: Vec<CubeSpawn>,
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            floor_size: FLOOR_SIZE,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            camera_pitch: DEFAULT_CAMERA_PITCH,
            show_boundaries: false,
            show_labels: true,
            cubes: vec![CubeSpawn {
                name: "Cube".into(),
                kind: CubeKind::Regular,
                position: [0.0, 0.0],
                yaw_degrees: 0.0,
            }],
        }
    }
}

/// One cube of the starting roster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CubeSpawn {
    pub name: String,
    #[serde(default)]
    pub kind: CubeKind,
    /// Horizontal position as `[x, z]`.
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default)]
    pub yaw_degrees: f32,
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("the cube roster is empty")]
    EmptyRoster,
    #[error("floor size must be positive and finite, got {0}")]
    InvalidFloorSize(f32),
    #[error("cube name '{0}' is used more than once")]
    DuplicateCubeName(String),
    #[error("cube #{0} has a blank name")]
    BlankCubeName(usize),
    #[error("cube '{name}' spawns at ({x}, {z}), outside the floor")]
    SpawnOutsideFloor { name: String, x: f32, z: f32 },
    #[error("failed to load settings from '{path}': {reason}")]
    LoadFailed { path: String, reason: String },
}

impl PlaygroundSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.floor_size.is_finite() && self.floor_size > 0.0) {
            return Err(SettingsError::InvalidFloorSize(self.floor_size));
        }
        if self.cubes.is_empty() {
            return Err(SettingsError::EmptyRoster);
        }

        let half_extent = self.floor_size * 0.5;
        let mut names = HashSet::new();
        for (index, spawn) in self.cubes.iter().enumerate() {
            if spawn.name.trim().is_empty() {
                return Err(SettingsError::BlankCubeName(index));
            }
            if !names.insert(spawn.name.as_str()) {
                return Err(SettingsError::DuplicateCubeName(spawn.name.clone()));
            }
            let [x, z] = spawn.position;
            if x.abs() > half_extent || z.abs() > half_extent {
                return Err(SettingsError::SpawnOutsideFloor {
                    name: spawn.name.clone(),
                    x,
                    z,
                });
            }
        }

        Ok(())
    }
}

impl CubeSpawn {
    pub fn position(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PlaygroundSettings {
        serde_json::from_str(json).expect("settings fixture should parse")
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = parse(r#"{ "cubes": [{ "name": "a" }] }"#);

        assert_eq!(settings.floor_size, 75.0);
        assert!(settings.show_labels);
        assert_eq!(settings.cubes[0].kind, CubeKind::Regular);
        assert_eq!(settings.cubes[0].position(), Vec2::ZERO);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn full_roster_parses() {
        let settings = parse(
            r#"{
                "floor_size": 90,
                "show_boundaries": true,
                "cubes": [
                    { "name": "a", "kind": "tofu", "position": [10, -4], "yaw_degrees": 90 },
                    { "name": "b", "kind": "robot" }
                ]
            }"#,
        );

        assert_eq!(settings.floor_size, 90.0);
        assert!(settings.show_boundaries);
        assert_eq!(settings.cubes[0].kind, CubeKind::Tofu);
        assert_eq!(settings.cubes[0].position(), Vec2::new(10.0, -4.0));
        assert!((settings.cubes[0].yaw() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(settings.cubes[1].kind, CubeKind::Robot);
    }

    #[test]
    fn default_settings_are_valid() {
        assert_eq!(PlaygroundSettings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_broken_layouts() {
        let empty = parse(r#"{ "cubes": [] }"#);
        assert_eq!(empty.validate(), Err(SettingsError::EmptyRoster));

        let flat = parse(r#"{ "floor_size": 0, "cubes": [{ "name": "a" }] }"#);
        assert_eq!(flat.validate(), Err(SettingsError::InvalidFloorSize(0.0)));

        let twins = parse(r#"{ "cubes": [{ "name": "a" }, { "name": "a" }] }"#);
        assert_eq!(
            twins.validate(),
            Err(SettingsError::DuplicateCubeName("a".into()))
        );

        let blank = parse(r#"{ "cubes": [{ "name": "a" }, { "name": "  " }] }"#);
        assert_eq!(blank.validate(), Err(SettingsError::BlankCubeName(1)));

        let astray = parse(r#"{ "cubes": [{ "name": "a", "position": [40, 0] }] }"#);
        assert!(matches!(
            astray.validate(),
            Err(SettingsError::SpawnOutsideFloor { .. })
        ));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let result: Result<PlaygroundSettings, _> =
            serde_json::from_str(r#"{ "cubes": [{ "name": "a", "kind": "jelly" }] }"#);
        assert!(result.is_err());
    }
}
