use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::accounts::{Accounts, ActiveAccount};
use crate::assets::AppState;
use crate::screens::{self, ALERT, AuthScreen, FIELD_BG, INK, MUTED, OVERLAY, PANEL, TEAL};

pub struct AuthPlugin;

impl Plugin for AuthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AuthScreen::Login), spawn_login)
            .add_systems(OnExit(AuthScreen::Login), screens::despawn_all::<LoginRoot>)
            .add_systems(OnEnter(AuthScreen::Register), spawn_register)
            .add_systems(OnExit(AuthScreen::Register), screens::despawn_all::<RegisterRoot>)
            .add_systems(
                Update,
                (
                    focus_on_click,
                    enter_text,
                    sync_field_text,
                    outline_focused_field,
                    handle_switch,
                    handle_submit,
                )
                    .run_if(in_state(AppState::SignedOut)),
            );
    }
}

/// A single-line text box. The value lives here; the child text is a view.
#[derive(Component)]
pub struct TextField {
    pub value: String,
    pub masked: bool,
    pub placeholder: &'static str,
}

#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Name,
    Email,
    Password,
}

#[derive(Component)]
struct Focused;

#[derive(Component)]
struct FieldText;

#[derive(Component)]
struct ErrorLine;

#[derive(Component)]
struct LoginRoot;

#[derive(Component)]
struct RegisterRoot;

#[derive(Component)]
struct SubmitButton;

#[derive(Component)]
struct SwitchButton(AuthScreen);

struct FormSpec {
    title: &'static str,
    fields: &'static [(FieldKind, &'static str, bool)],
    submit: &'static str,
    switch: (&'static str, AuthScreen),
}

fn spawn_login(mut commands: Commands) {
    spawn_form(
        &mut commands,
        LoginRoot,
        "Login Screen",
        FormSpec {
            title: "Se connecter",
            fields: &[
                (FieldKind::Email, "Email", false),
                (FieldKind::Password, "Mot de passe", true),
            ],
            submit: "Se connecter",
            switch: ("Créer un compte", AuthScreen::Register),
        },
    );
}

fn spawn_register(mut commands: Commands) {
    spawn_form(
        &mut commands,
        RegisterRoot,
        "Register Screen",
        FormSpec {
            title: "S'inscrire",
            fields: &[
                (FieldKind::Name, "Nom", false),
                (FieldKind::Email, "Email", false),
                (FieldKind::Password, "Mot de passe", true),
            ],
            submit: "S'inscrire",
            switch: ("J'ai déjà un compte", AuthScreen::Login),
        },
    );
}

fn spawn_form(commands: &mut Commands, marker: impl Component, name: &'static str, form: FormSpec) {
    let root = commands
        .spawn((
            marker,
            Name::new(name),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(OVERLAY),
        ))
        .id();

    let panel = commands
        .spawn((
            Name::new("Auth Panel"),
            Node {
                width: Val::Px(360.0),
                padding: UiRect::all(Val::Px(22.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(PANEL),
            BorderColor::all(TEAL),
        ))
        .id();
    commands.entity(root).add_child(panel);

    commands.entity(panel).with_child((
        Text::new(form.title),
        TextFont {
            font_size: 26.0,
            ..default()
        },
        TextColor(INK),
    ));

    for &(kind, placeholder, masked) in form.fields {
        commands.entity(panel).with_child((
            kind,
            TextField {
                value: String::new(),
                masked,
                placeholder,
            },
            Button,
            Name::new(placeholder),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(36.0),
                padding: UiRect::horizontal(Val::Px(8.0)),
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(FIELD_BG),
            BorderColor::all(MUTED),
            children![(
                FieldText,
                Text::new(placeholder),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(MUTED),
            )],
        ));
    }

    commands
        .entity(panel)
        .with_child(screens::text_button(SubmitButton, form.submit));

    commands.entity(panel).with_child((
        SwitchButton(form.switch.1),
        Button,
        Name::new("Switch Auth Screen"),
        Node {
            justify_content: JustifyContent::Center,
            ..default()
        },
        children![(
            Text::new(form.switch.0),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(TEAL),
        )],
    ));

    commands.entity(panel).with_child((
        ErrorLine,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(ALERT),
    ));
}

fn focus_on_click(
    mut commands: Commands,
    clicked: Query<(Entity, &Interaction), (Changed<Interaction>, With<TextField>)>,
    focused: Query<Entity, With<Focused>>,
) {
    for (entity, interaction) in clicked.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        for other in focused.iter() {
            commands.entity(other).remove::<Focused>();
        }
        commands.entity(entity).insert(Focused);
    }
}

/// Keyboard entry into the focused field, from the same logical-key stream
/// the movement sampler listens to in the ward.
fn enter_text(
    mut keys: MessageReader<KeyboardInput>,
    mut fields: Query<&mut TextField, With<Focused>>,
) {
    let Ok(mut field) = fields.single_mut() else {
        // Drain so stale presses don't land in the next focused field
        keys.clear();
        return;
    };

    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        match &event.logical_key {
            Key::Character(text) => {
                if field.value.len() < 64 && !text.chars().any(char::is_control) {
                    field.value.push_str(text);
                }
            }
            Key::Space => {
                if field.value.len() < 64 {
                    field.value.push(' ');
                }
            }
            Key::Backspace => {
                field.value.pop();
            }
            _ => {}
        }
    }
}

fn sync_field_text(
    fields: Query<(&TextField, &Children), Changed<TextField>>,
    mut texts: Query<(&mut Text, &mut TextColor), With<FieldText>>,
) {
    for (field, children) in fields.iter() {
        for child in children.iter() {
            let Ok((mut text, mut color)) = texts.get_mut(child) else {
                continue;
            };
            if field.value.is_empty() {
                *text = Text::new(field.placeholder);
                *color = TextColor(MUTED);
            } else if field.masked {
                *text = Text::new("•".repeat(field.value.chars().count()));
                *color = TextColor(INK);
            } else {
                *text = Text::new(field.value.clone());
                *color = TextColor(INK);
            }
        }
    }
}

fn outline_focused_field(mut fields: Query<(Option<&Focused>, &mut BorderColor), With<TextField>>) {
    for (focused, mut border) in fields.iter_mut() {
        *border = BorderColor::all(if focused.is_some() { TEAL } else { MUTED });
    }
}

fn handle_switch(
    clicked: Query<(&Interaction, &SwitchButton), Changed<Interaction>>,
    mut next: ResMut<NextState<AuthScreen>>,
) {
    for (interaction, switch) in clicked.iter() {
        if *interaction == Interaction::Pressed {
            next.set(switch.0.clone());
        }
    }
}

fn handle_submit(
    clicked: Query<&Interaction, (Changed<Interaction>, With<SubmitButton>)>,
    fields: Query<(&FieldKind, &TextField)>,
    screen: Res<State<AuthScreen>>,
    mut accounts: ResMut<Accounts>,
    mut active: ResMut<ActiveAccount>,
    mut next_app: ResMut<NextState<AppState>>,
    mut error_line: Query<&mut Text, With<ErrorLine>>,
) {
    if !clicked
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        return;
    }

    let value_of = |wanted: FieldKind| {
        fields
            .iter()
            .find(|(kind, _)| **kind == wanted)
            .map(|(_, field)| field.value.clone())
            .unwrap_or_default()
    };

    let email = value_of(FieldKind::Email).trim().to_owned();
    let password = value_of(FieldKind::Password);

    let attempt = match screen.get() {
        AuthScreen::Login => accounts.sign_in(&email, &password),
        AuthScreen::Register => {
            let name = value_of(FieldKind::Name).trim().to_owned();
            accounts.register(&name, &email, &password)
        }
    };

    match attempt {
        Ok(id) => {
            active.0 = Some(id);
            next_app.set(AppState::SignedIn);
            info!("connexion: {email}");
        }
        Err(error) => {
            warn!("échec d'authentification: {error:?}");
            for mut text in error_line.iter_mut() {
                *text = Text::new(error.message());
            }
        }
    }
}
