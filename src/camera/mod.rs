pub mod controller;

pub use controller::*;

use bevy::prelude::*;

use crate::assets::AppState;

/// Plugin for the trailing third-person camera
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            controller::update_camera_follow.run_if(in_state(AppState::SignedIn)),
        );
    }
}
