use bevy::prelude::*;

use crate::player::controller::PlayerRoot;

/// Component for the trailing follow camera
#[derive(Component)]
pub struct FollowCamera {
    /// Rest offset from the player to the camera (above and behind)
    pub offset: Vec3,
    /// Fraction of the remaining gap closed per tick, in (0, 1)
    pub smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.0, 6.0),
            smoothing: 0.1,
        }
    }
}

/// One follow step: move `camera` towards `target` by `alpha` of the gap.
/// Exponential smoothing - the camera trails the target and converges on it
/// without overshooting for alpha in (0, 1).
pub fn follow_step(camera: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    camera + (target - camera) * alpha
}

/// Per-frame camera tick. Runs independently of the movement tick; a missing
/// camera or player (one frame around scene setup/teardown) skips it.
pub fn update_camera_follow(
    mut camera_query: Query<(&mut Transform, &FollowCamera)>,
    player_query: Query<&Transform, (With<PlayerRoot>, Without<FollowCamera>)>,
) {
    let Ok((mut camera_transform, follow)) = camera_query.single_mut() else {
        return;
    };

    let Ok(player_transform) = player_query.single() else {
        return;
    };

    let player_pos = player_transform.translation;
    camera_transform.translation = follow_step(
        camera_transform.translation,
        player_pos + follow.offset,
        follow.smoothing,
    );

    // Aim at the player itself, not the lerp target, so the framing stays
    // centered while the position is still catching up
    camera_transform.look_at(player_pos, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn one_step_from_origin_matches_the_formula() {
        // E = (0,0,0), C = (0,0,0), offset (0,3,6), alpha 0.1 -> C' = (0, 0.3, 0.6)
        let next = follow_step(Vec3::ZERO, Vec3::new(0.0, 3.0, 6.0), 0.1);
        assert!((next - Vec3::new(0.0, 0.3, 0.6)).length() < 1e-6);
    }

    #[test]
    fn repeated_steps_converge_without_overshoot() {
        let target = Vec3::new(0.0, 3.0, 6.0);
        let mut camera = Vec3::new(5.0, -2.0, 9.0);
        let mut gap = (target - camera).length();

        for _ in 0..400 {
            camera = follow_step(camera, target, 0.1);
            let next_gap = (target - camera).length();
            assert!(next_gap <= gap);
            gap = next_gap;
        }

        assert!(gap < 1e-3);
    }

    #[test]
    fn camera_tick_trails_and_faces_the_player() {
        let mut world = World::new();
        world.spawn((PlayerRoot, Transform::from_xyz(0.0, 0.0, 0.0)));
        let camera = world
            .spawn((FollowCamera::default(), Transform::from_xyz(0.0, 0.0, 0.0)))
            .id();

        world.run_system_once(update_camera_follow).unwrap();

        let transform = world.get::<Transform>(camera).unwrap();
        assert!((transform.translation - Vec3::new(0.0, 0.3, 0.6)).length() < 1e-6);

        // Facing the player, not the lerp target
        let towards_player = (Vec3::ZERO - transform.translation).normalize();
        assert!(transform.forward().dot(towards_player) > 0.999);
    }

    #[test]
    fn tick_without_player_leaves_the_camera_alone() {
        let mut world = World::new();
        let start = Transform::from_xyz(1.0, 2.0, 3.0);
        let camera = world.spawn((FollowCamera::default(), start)).id();

        world.run_system_once(update_camera_follow).unwrap();

        assert_eq!(world.get::<Transform>(camera).unwrap().translation, start.translation);
    }

    #[test]
    fn tick_without_camera_is_a_no_op() {
        let mut world = World::new();
        world.spawn((PlayerRoot, Transform::default()));
        world.run_system_once(update_camera_follow).unwrap();
    }
}
