use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum AppState {
    #[default]
    AssetLoading,
    SignedOut,
    SignedIn,
}

#[derive(Resource, AssetCollection)]
pub struct GameAssets {
    #[asset(path = "hospital_room.glb#Scene0")]
    pub hospital_room: Handle<Scene>,

    #[asset(path = "patient.glb#Scene0")]
    pub patient: Handle<Scene>,

    #[asset(path = "stethoscope.glb#Scene0")]
    pub stethoscope: Handle<Scene>,

    #[asset(path = "thermometer.glb#Scene0")]
    pub thermometer: Handle<Scene>,
}

pub struct AssetPlugin;

impl Plugin for AssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().add_loading_state(
            LoadingState::new(AppState::AssetLoading)
                .continue_to_state(AppState::SignedOut)
                .load_collection::<GameAssets>(),
        );
    }
}
