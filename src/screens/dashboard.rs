use bevy::prelude::*;

use crate::accounts::{Accounts, ActiveAccount};
use crate::assets::AppState;
use crate::screens::{self, Screen};

pub struct DashboardPlugin;

impl Plugin for DashboardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Dashboard), spawn_dashboard)
            .add_systems(OnExit(Screen::Dashboard), screens::despawn_all::<DashboardRoot>)
            .add_systems(
                Update,
                (handle_nav, handle_sign_out).run_if(in_state(Screen::Dashboard)),
            );
    }
}

#[derive(Component)]
struct DashboardRoot;

#[derive(Component)]
struct NavButton(Screen);

#[derive(Component)]
struct SignOutButton;

const NAV: [(Screen, &str); 5] = [
    (Screen::Patient, "Voir Patient"),
    (Screen::Analyses, "Analyses"),
    (Screen::Diagnostic, "Diagnostic"),
    (Screen::Specialist, "Avis Spécialiste"),
    (Screen::Leaderboard, "Leaderboard"),
];

fn spawn_dashboard(mut commands: Commands, accounts: Res<Accounts>, active: Res<ActiveAccount>) {
    let email = active
        .0
        .and_then(|id| accounts.get(id))
        .map(|account| account.email.clone())
        .unwrap_or_default();

    let panel = screens::screen_panel(
        &mut commands,
        DashboardRoot,
        "Dashboard Screen",
        &format!("Bienvenue, {email}"),
    );

    for (screen, label) in NAV {
        commands
            .entity(panel)
            .with_child(screens::text_button(NavButton(screen), label));
    }

    commands
        .entity(panel)
        .with_child(screens::text_button(SignOutButton, "Se déconnecter"));
}

fn handle_nav(
    clicked: Query<(&Interaction, &NavButton), Changed<Interaction>>,
    mut next: ResMut<NextState<Screen>>,
) {
    for (interaction, nav) in clicked.iter() {
        if *interaction == Interaction::Pressed {
            info!("navigation: {}", nav.0);
            next.set(nav.0.clone());
        }
    }
}

fn handle_sign_out(
    clicked: Query<&Interaction, (Changed<Interaction>, With<SignOutButton>)>,
    mut active: ResMut<ActiveAccount>,
    mut next: ResMut<NextState<AppState>>,
) {
    for interaction in clicked.iter() {
        if *interaction == Interaction::Pressed {
            info!("déconnexion");
            active.0 = None;
            next.set(AppState::SignedOut);
        }
    }
}
