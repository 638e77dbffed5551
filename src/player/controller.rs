use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

/// Distance covered per held direction per tick.
pub const MOVE_SPEED: f32 = 0.1;

#[derive(Component, Default)]
#[require(Transform, InheritedVisibility)]
pub struct PlayerRoot;

/// The set of currently-held keys, identified by their lower-cased logical
/// key string. Written only through [`press`](InputState::press) and
/// [`release`](InputState::release), read by the per-frame movement tick.
#[derive(Resource, Default, Debug)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// False for any key never seen.
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(&key.to_lowercase())
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

pub fn on_player_spawn(
    on: On<Add, PlayerRoot>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.entity(on.event_target()).insert((
        Mesh3d(meshes.add(Cuboid::new(0.5, 1.8, 0.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.16, 0.28, 0.85),
            perceptual_roughness: 0.8,
            ..default()
        })),
        // Feet at floor level: the body is 1.8 tall, so the center sits at 0.9
        Transform::from_xyz(0.0, 0.9, 5.0),
    ));
}

/// Mirrors the host's key-down/key-up stream into [`InputState`]. Only
/// character keys participate; key repeats collapse into the already-set flag.
pub fn sample_keyboard(mut input: ResMut<InputState>, mut keys: MessageReader<KeyboardInput>) {
    for event in keys.read() {
        let Key::Character(ref key) = event.logical_key else {
            continue;
        };
        match event.state {
            ButtonState::Pressed => input.press(key.as_str()),
            ButtonState::Released => input.release(key.as_str()),
        }
    }
}

/// Displacement for one tick given the currently-held keys. Held directions
/// compose additively, so two axes at once move faster than one.
pub fn movement_delta(input: &InputState, speed: f32) -> Vec3 {
    let mut delta = Vec3::ZERO;
    if input.is_held("w") {
        delta.z -= speed;
    }
    if input.is_held("s") {
        delta.z += speed;
    }
    if input.is_held("a") {
        delta.x -= speed;
    }
    if input.is_held("d") {
        delta.x += speed;
    }
    delta
}

/// Per-frame movement tick. A missing player (one frame around scene
/// setup/teardown) skips the tick entirely.
pub fn apply_movement(input: Res<InputState>, mut query: Query<&mut Transform, With<PlayerRoot>>) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    transform.translation += movement_delta(&input, MOVE_SPEED);
}

/// Teardown counterpart of [`sample_keyboard`]: a key still held when the
/// ward is left must not read as held on the next visit.
pub fn release_input(mut input: ResMut<InputState>) {
    input.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn held(keys: &[&str]) -> InputState {
        let mut input = InputState::default();
        for key in keys {
            input.press(key);
        }
        input
    }

    #[test]
    fn keys_normalize_to_lower_case() {
        let mut input = InputState::default();
        input.press("W");
        assert!(input.is_held("w"));
        assert!(input.is_held("W"));
        input.release("w");
        assert!(!input.is_held("W"));
    }

    #[test]
    fn never_seen_key_reads_as_not_held() {
        assert!(!InputState::default().is_held("w"));
    }

    #[test]
    fn released_key_reads_as_not_held_on_next_tick() {
        let mut input = held(&["w", "a"]);
        input.release("w");
        assert_eq!(movement_delta(&input, MOVE_SPEED), Vec3::new(-0.1, 0.0, 0.0));
    }

    #[test]
    fn no_directional_keys_means_no_motion() {
        assert_eq!(movement_delta(&held(&[]), MOVE_SPEED), Vec3::ZERO);
        assert_eq!(movement_delta(&held(&["x", "e"]), MOVE_SPEED), Vec3::ZERO);
    }

    #[test]
    fn forward_accumulates_exactly_per_tick() {
        let input = held(&["w"]);
        let mut position = Vec3::new(0.0, 0.9, 5.0);
        for _ in 0..40 {
            position += movement_delta(&input, MOVE_SPEED);
        }
        assert!((position.z - 1.0).abs() < 1e-4);
        assert_eq!(position.x, 0.0);
        assert_eq!(position.y, 0.9);
    }

    #[test]
    fn diagonal_movement_is_unnormalized() {
        // Both axes move the full step, not s/sqrt(2)
        let delta = movement_delta(&held(&["w", "a"]), MOVE_SPEED);
        assert_eq!(delta, Vec3::new(-0.1, 0.0, -0.1));
    }

    #[test]
    fn opposite_keys_cancel_out() {
        assert_eq!(movement_delta(&held(&["w", "s"]), MOVE_SPEED), Vec3::ZERO);
    }

    #[test]
    fn non_directional_keys_do_not_disturb_movement() {
        let delta = movement_delta(&held(&["w", "shift", "p"]), MOVE_SPEED);
        assert_eq!(delta, Vec3::new(0.0, 0.0, -0.1));
    }

    #[test]
    fn tick_without_player_is_a_no_op() {
        let mut world = World::new();
        world.init_resource::<InputState>();
        world.resource_mut::<InputState>().press("w");
        world.run_system_once(apply_movement).unwrap();
    }

    #[test]
    fn tick_moves_the_player_in_place() {
        let mut world = World::new();
        world.init_resource::<InputState>();
        world.resource_mut::<InputState>().press("w");
        world.resource_mut::<InputState>().press("d");
        let player = world
            .spawn((PlayerRoot, Transform::from_xyz(0.0, 0.9, 5.0)))
            .id();

        world.run_system_once(apply_movement).unwrap();

        let translation = world.get::<Transform>(player).unwrap().translation;
        assert!((translation.z - 4.9).abs() < 1e-6);
        assert!((translation.x - 0.1).abs() < 1e-6);
    }
}
