use bevy::prelude::*;
use strum_macros::Display;

use crate::assets::AppState;

pub mod auth;
pub mod consult;
pub mod dashboard;
pub mod leaderboard;

#[derive(SubStates, Clone, PartialEq, Eq, Hash, Debug, Default, Display)]
#[source(AppState = AppState::SignedOut)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
}

#[derive(SubStates, Clone, PartialEq, Eq, Hash, Debug, Default, Display)]
#[source(AppState = AppState::SignedIn)]
pub enum Screen {
    #[default]
    Dashboard,
    Patient,
    Analyses,
    Diagnostic,
    Specialist,
    Leaderboard,
}

/// One-shot confirmation line carried onto the next screen (the original UI
/// used blocking alerts for these).
#[derive(Resource, Default)]
pub struct Notice(pub Option<String>);

// Colors tuned for a "daylight clinic" vibe: pale panels, teal accents.
pub(crate) const OVERLAY: Color = Color::srgba(0.03, 0.08, 0.10, 0.82);
pub(crate) const PANEL: Color = Color::srgba(0.94, 0.97, 0.97, 0.95);
pub(crate) const INK: Color = Color::srgb(0.09, 0.14, 0.17);
pub(crate) const TEAL: Color = Color::srgb(0.13, 0.45, 0.47);
pub(crate) const TEAL_DARK: Color = Color::srgb(0.07, 0.32, 0.34);
pub(crate) const TEAL_LIGHT: Color = Color::srgb(0.22, 0.58, 0.60);
pub(crate) const ALERT: Color = Color::srgb(0.80, 0.15, 0.15);
pub(crate) const FIELD_BG: Color = Color::srgb(1.0, 1.0, 1.0);
pub(crate) const MUTED: Color = Color::srgb(0.55, 0.60, 0.63);

/// Marker for buttons that take the shared hover/press coloring.
#[derive(Component)]
pub(crate) struct UiButton;

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.add_sub_state::<AuthScreen>();
        app.add_sub_state::<Screen>();
        app.init_resource::<Notice>();
        app.add_plugins((
            auth::AuthPlugin,
            dashboard::DashboardPlugin,
            consult::ConsultPlugin,
            leaderboard::LeaderboardPlugin,
        ));
        app.add_systems(Update, button_visuals);
    }
}

fn button_visuals(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<UiButton>)>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        *background = BackgroundColor(match interaction {
            Interaction::Pressed => TEAL_DARK,
            Interaction::Hovered => TEAL_LIGHT,
            Interaction::None => TEAL,
        });
    }
}

pub(crate) fn despawn_all<T: Component>(mut commands: Commands, roots: Query<Entity, With<T>>) {
    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
}

/// Small panel anchored top-left so the ward stays visible (and walkable)
/// behind it. Returns the panel entity for the caller to fill.
pub(crate) fn screen_panel(
    commands: &mut Commands,
    marker: impl Component,
    name: &'static str,
    title: &str,
) -> Entity {
    let root = commands
        .spawn((
            marker,
            Name::new(name),
            GlobalZIndex(10),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(24.0),
                top: Val::Px(24.0),
                ..default()
            },
        ))
        .id();

    let panel = commands
        .spawn((
            Name::new("Screen Panel"),
            Node {
                min_width: Val::Px(340.0),
                padding: UiRect::all(Val::Px(18.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(PANEL),
            BorderColor::all(TEAL),
        ))
        .id();
    commands.entity(root).add_child(panel);

    commands.entity(panel).with_child((
        Name::new("Screen Title"),
        Text::new(title),
        TextFont {
            font_size: 26.0,
            ..default()
        },
        TextColor(INK),
    ));

    panel
}

/// Displays and consumes the pending notice, if any.
pub(crate) fn attach_notice(commands: &mut Commands, panel: Entity, notice: &mut Notice) {
    let Some(message) = notice.0.take() else {
        return;
    };
    commands.entity(panel).with_child((
        Name::new("Notice"),
        Text::new(message),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(TEAL_DARK),
    ));
}

pub(crate) fn body_text(value: &str) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(INK),
    )
}

pub(crate) fn text_button<M: Component>(marker: M, label: &str) -> impl Bundle {
    (
        marker,
        UiButton,
        Button,
        Name::new(label.to_owned()),
        Node {
            width: Val::Px(260.0),
            height: Val::Px(40.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(TEAL),
        BorderColor::all(TEAL_DARK),
        children![(
            Text::new(label),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::srgb(0.96, 0.98, 0.98)),
        )],
    )
}
