use bevy::prelude::*;

use crate::accounts::Accounts;
use crate::screens::{self, Notice, Screen};

pub struct LeaderboardPlugin;

impl Plugin for LeaderboardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Leaderboard), spawn_leaderboard)
            .add_systems(
                OnExit(Screen::Leaderboard),
                screens::despawn_all::<LeaderboardRoot>,
            )
            .add_systems(Update, handle_back.run_if(in_state(Screen::Leaderboard)));
    }
}

#[derive(Component)]
struct LeaderboardRoot;

#[derive(Component)]
struct BackButton;

fn spawn_leaderboard(mut commands: Commands, accounts: Res<Accounts>, mut notice: ResMut<Notice>) {
    let panel = screens::screen_panel(
        &mut commands,
        LeaderboardRoot,
        "Leaderboard Screen",
        "Leaderboard",
    );
    screens::attach_notice(&mut commands, panel, &mut notice);

    for (rank, account) in accounts.leaderboard().iter().enumerate() {
        commands
            .entity(panel)
            .with_child(screens::body_text(&format!(
                "{}. {}: {} pts",
                rank + 1,
                account.name,
                account.points
            )));
    }

    commands.entity(panel).with_child(screens::text_button(
        BackButton,
        "Retour au tableau de bord",
    ));
}

fn handle_back(
    clicked: Query<&Interaction, (Changed<Interaction>, With<BackButton>)>,
    mut next: ResMut<NextState<Screen>>,
) {
    for interaction in clicked.iter() {
        if *interaction == Interaction::Pressed {
            next.set(Screen::Dashboard);
        }
    }
}
