use bevy::prelude::*;

use crate::accounts::{Accounts, ActiveAccount};
use crate::assets::AppState;
use crate::cases::ActiveCase;
use crate::screens::{self, Notice, Screen};

/// Scoring mirrors the paper flow: a confirmed diagnosis is worth more
/// than asking for a second opinion.
pub const DIAGNOSTIC_POINTS: u32 = 10;
pub const SPECIALIST_POINTS: u32 = 5;

pub struct ConsultPlugin;

impl Plugin for ConsultPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Patient), spawn_patient)
            .add_systems(OnExit(Screen::Patient), screens::despawn_all::<PatientRoot>)
            .add_systems(OnEnter(Screen::Analyses), spawn_analyses)
            .add_systems(OnExit(Screen::Analyses), screens::despawn_all::<AnalysesRoot>)
            .add_systems(OnEnter(Screen::Diagnostic), spawn_diagnostic)
            .add_systems(
                OnExit(Screen::Diagnostic),
                screens::despawn_all::<DiagnosticRoot>,
            )
            .add_systems(OnEnter(Screen::Specialist), spawn_specialist)
            .add_systems(
                OnExit(Screen::Specialist),
                screens::despawn_all::<SpecialistRoot>,
            )
            .add_systems(
                Update,
                handle_consult_actions.run_if(in_state(AppState::SignedIn)),
            );
    }
}

#[derive(Component)]
struct PatientRoot;

#[derive(Component)]
struct AnalysesRoot;

#[derive(Component)]
struct DiagnosticRoot;

#[derive(Component)]
struct SpecialistRoot;

#[derive(Component, Clone, Copy)]
enum ConsultAction {
    ToAnalyses,
    ValidateAnalyses,
    ConfirmDiagnostic,
    SpecialistOpinion,
}

fn spawn_patient(mut commands: Commands, case: Res<ActiveCase>, mut notice: ResMut<Notice>) {
    let panel = screens::screen_panel(
        &mut commands,
        PatientRoot,
        "Patient Screen",
        "Informations du patient",
    );
    screens::attach_notice(&mut commands, panel, &mut notice);

    commands
        .entity(panel)
        .with_child(screens::body_text(&format!("Nom: {}", case.0.name)));
    commands
        .entity(panel)
        .with_child(screens::body_text(&format!(
            "Symptômes: {}",
            case.0.symptoms
        )));
    commands.entity(panel).with_child(screens::text_button(
        ConsultAction::ToAnalyses,
        "Suivant → Analyses",
    ));
}

fn spawn_analyses(mut commands: Commands, mut notice: ResMut<Notice>) {
    let panel = screens::screen_panel(
        &mut commands,
        AnalysesRoot,
        "Analyses Screen",
        "Analyses nécessaires",
    );
    screens::attach_notice(&mut commands, panel, &mut notice);

    commands.entity(panel).with_child(screens::text_button(
        ConsultAction::ValidateAnalyses,
        "Valider Analyses",
    ));
}

fn spawn_diagnostic(mut commands: Commands, mut notice: ResMut<Notice>) {
    let panel = screens::screen_panel(
        &mut commands,
        DiagnosticRoot,
        "Diagnostic Screen",
        "Diagnostic",
    );
    screens::attach_notice(&mut commands, panel, &mut notice);

    commands.entity(panel).with_child(screens::text_button(
        ConsultAction::ConfirmDiagnostic,
        "Confirmer Diagnostic",
    ));
}

fn spawn_specialist(mut commands: Commands, mut notice: ResMut<Notice>) {
    let panel = screens::screen_panel(
        &mut commands,
        SpecialistRoot,
        "Specialist Screen",
        "Avis du spécialiste",
    );
    screens::attach_notice(&mut commands, panel, &mut notice);

    commands.entity(panel).with_child(screens::text_button(
        ConsultAction::SpecialistOpinion,
        "Ajouter Avis",
    ));
}

fn handle_consult_actions(
    clicked: Query<(&Interaction, &ConsultAction), Changed<Interaction>>,
    mut accounts: ResMut<Accounts>,
    active: Res<ActiveAccount>,
    mut notice: ResMut<Notice>,
    mut next: ResMut<NextState<Screen>>,
) {
    for (interaction, action) in clicked.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            ConsultAction::ToAnalyses => next.set(Screen::Analyses),
            ConsultAction::ValidateAnalyses => {
                notice.0 = Some("Analyses demandées".to_owned());
                next.set(Screen::Diagnostic);
            }
            ConsultAction::ConfirmDiagnostic => {
                if let Some(id) = active.0 {
                    accounts.award_points(id, DIAGNOSTIC_POINTS);
                }
                notice.0 = Some(format!("Diagnostic réussi! +{DIAGNOSTIC_POINTS} points"));
                next.set(Screen::Specialist);
            }
            ConsultAction::SpecialistOpinion => {
                if let Some(id) = active.0 {
                    accounts.award_points(id, SPECIALIST_POINTS);
                }
                notice.0 = Some(format!(
                    "Avis du spécialiste ajouté! +{SPECIALIST_POINTS} points"
                ));
                next.set(Screen::Leaderboard);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountId;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_account() -> (World, AccountId) {
        let mut world = World::new();
        let mut accounts = Accounts::default();
        let id = accounts
            .register("Dr. Test", "test@clinique.fr", "secret")
            .unwrap();
        world.insert_resource(accounts);
        world.insert_resource(ActiveAccount(Some(id)));
        world.init_resource::<Notice>();
        world.init_resource::<NextState<Screen>>();
        (world, id)
    }

    #[test]
    fn confirmed_diagnostic_awards_ten_points_and_moves_on() {
        let (mut world, id) = world_with_account();
        world.spawn((Interaction::Pressed, ConsultAction::ConfirmDiagnostic));

        world.run_system_once(handle_consult_actions).unwrap();

        assert_eq!(
            world.resource::<Accounts>().get(id).unwrap().points,
            DIAGNOSTIC_POINTS
        );
        assert!(matches!(
            world.resource::<NextState<Screen>>(),
            NextState::Pending(Screen::Specialist)
        ));
        assert!(world.resource::<Notice>().0.is_some());
    }

    #[test]
    fn specialist_opinion_awards_five_points() {
        let (mut world, id) = world_with_account();
        world.spawn((Interaction::Pressed, ConsultAction::SpecialistOpinion));

        world.run_system_once(handle_consult_actions).unwrap();

        assert_eq!(
            world.resource::<Accounts>().get(id).unwrap().points,
            SPECIALIST_POINTS
        );
        assert!(matches!(
            world.resource::<NextState<Screen>>(),
            NextState::Pending(Screen::Leaderboard)
        ));
    }

    #[test]
    fn validating_analyses_awards_nothing() {
        let (mut world, id) = world_with_account();
        world.spawn((Interaction::Pressed, ConsultAction::ValidateAnalyses));

        world.run_system_once(handle_consult_actions).unwrap();

        assert_eq!(world.resource::<Accounts>().get(id).unwrap().points, 0);
        assert_eq!(
            world.resource::<Notice>().0.as_deref(),
            Some("Analyses demandées")
        );
        assert!(matches!(
            world.resource::<NextState<Screen>>(),
            NextState::Pending(Screen::Diagnostic)
        ));
    }

    #[test]
    fn hovering_a_button_does_not_score() {
        let (mut world, id) = world_with_account();
        world.spawn((Interaction::Hovered, ConsultAction::ConfirmDiagnostic));

        world.run_system_once(handle_consult_actions).unwrap();

        assert_eq!(world.resource::<Accounts>().get(id).unwrap().points, 0);
    }
}
