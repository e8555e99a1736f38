use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub settings_loaded: bool,
    pub settings_validated: bool,
}
