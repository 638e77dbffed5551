use bevy::prelude::*;

use crate::assets::AppState;
use crate::player::controller::*;

pub mod controller;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>();
        app.add_observer(on_player_spawn);
        app.add_systems(
            Update,
            (sample_keyboard, apply_movement)
                .chain()
                .run_if(in_state(AppState::SignedIn)),
        );
        app.add_systems(OnExit(AppState::SignedIn), release_input);
    }
}
