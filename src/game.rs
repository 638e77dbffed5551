use bevy::light::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
#[cfg(not(target_arch = "wasm32"))]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::accounts::{Accounts, ActiveAccount};
use crate::assets::{AppState, GameAssets};
use crate::camera::controller::FollowCamera;
use crate::cases::{ActiveCase, draw_case};
use crate::player::controller::PlayerRoot;

pub struct GamePlugin;

/// Everything spawned for one visit to the ward; torn down on sign-out.
#[derive(Component)]
pub struct WardScene;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default());

        #[cfg(not(target_arch = "wasm32"))]
        app.add_plugins(WorldInspectorPlugin::new());

        app.add_plugins(crate::assets::AssetPlugin);
        app.add_plugins(crate::player::PlayerPlugin);
        app.add_plugins(crate::camera::CameraPlugin);
        app.add_plugins(crate::screens::ScreensPlugin);
        app.init_resource::<Accounts>();
        app.init_resource::<ActiveAccount>();
        app.init_resource::<ActiveCase>();
        app.insert_resource(ClearColor(Color::srgb(0.80, 0.87, 0.92))); // Pale daylight backdrop
        app.add_systems(OnEnter(AppState::SignedIn), (setup_ward, draw_case));
        app.add_systems(OnExit(AppState::SignedIn), teardown_ward);
    }
}

/// Set up the hospital room the player walks around in
fn setup_ward(
    mut commands: Commands,
    mut ambient_light: ResMut<AmbientLight>,
    assets: Res<GameAssets>,
) {
    ambient_light.brightness = 90.0;

    commands.spawn((
        WardScene,
        DirectionalLight {
            illuminance: light_consts::lux::OVERCAST_DAY,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        // The room is small, so tight shadow bounds keep the quality up
        CascadeShadowConfigBuilder {
            first_cascade_far_bound: 4.0,
            maximum_distance: 60.0,
            ..default()
        }
        .build(),
    ));

    commands.spawn((
        WardScene,
        SceneRoot(assets.hospital_room.clone()),
        Name::new("Hospital Room"),
    ));

    commands.spawn((
        WardScene,
        SceneRoot(assets.patient.clone()),
        Transform::from_xyz(0.0, 0.0, -2.0),
        Name::new("Patient"),
    ));

    commands.spawn((
        WardScene,
        SceneRoot(assets.stethoscope.clone()),
        Transform::from_xyz(1.0, 0.0, 0.0).with_scale(Vec3::splat(0.5)),
        Name::new("Stethoscope"),
    ));

    commands.spawn((
        WardScene,
        SceneRoot(assets.thermometer.clone()),
        Transform::from_xyz(-1.0, 0.0, 0.0).with_scale(Vec3::splat(0.5)),
        Name::new("Thermometer"),
    ));

    commands.spawn((WardScene, PlayerRoot, Name::new("Player")));

    // Trailing camera; starts at its rest offset behind the player's spawn
    commands.spawn((
        WardScene,
        Camera3d::default(),
        FollowCamera::default(),
        Transform::from_xyz(0.0, 3.0, 6.0).looking_at(Vec3::new(0.0, 0.9, 5.0), Vec3::Y),
        Name::new("Follow Camera"),
    ));
}

fn teardown_ward(mut commands: Commands, scene: Query<Entity, With<WardScene>>) {
    for entity in scene.iter() {
        commands.entity(entity).despawn();
    }
}
