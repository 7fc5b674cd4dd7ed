//! Side-view stage camera and automatic scrolling.

use bevy::prelude::*;

use crate::config::ShipConfig;

/// Marker for the camera the stage is viewed through.
#[derive(Component)]
pub struct StageCamera;

/// Entities carried along by the stage scroll.
#[derive(Component)]
pub struct Scrolling;

/// Place the camera on +X looking back at the ship plane with world +Z up,
/// so screen-right is world +Y and screen-up is world +Z.
pub fn side_view_transform(distance: f32) -> Transform {
    Transform::from_xyz(distance, 0.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z)
}

/// Spawn the stage camera and its light.
pub fn spawn_stage_camera(mut commands: Commands, config: Res<ShipConfig>) {
    commands.spawn((
        Name::new("StageCamera"),
        StageCamera,
        Scrolling,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            far: config.camera_distance * 4.0,
            ..default()
        }),
        side_view_transform(config.camera_distance),
    ));

    commands.spawn((
        Name::new("StageLight"),
        DirectionalLight {
            illuminance: 8000.0,
            ..default()
        },
        Transform::from_xyz(1.0, -0.5, 1.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
}

/// Carry the ship and camera along world +Y.
pub fn scroll_stage(
    time: Res<Time>,
    config: Res<ShipConfig>,
    mut query: Query<&mut Transform, With<Scrolling>>,
) {
    let offset = Vec3::Y * config.scroll_speed * time.delta_secs();
    for mut transform in query.iter_mut() {
        transform.translation += offset;
    }
}

/// Remove the camera when leaving the game.
pub fn cleanup_stage(
    mut commands: Commands,
    query: Query<Entity, Or<(With<StageCamera>, With<DirectionalLight>)>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_scroll_carries_only_scrolling_entities() {
        let mut app = App::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(250));
        app.insert_resource(time)
            .insert_resource(ShipConfig {
                scroll_speed: 1000.0,
                ..default()
            })
            .add_systems(Update, scroll_stage);

        let carried = app
            .world_mut()
            .spawn((Scrolling, Transform::from_xyz(1.0, 2.0, 3.0)))
            .id();
        let fixed = app.world_mut().spawn(Transform::from_xyz(1.0, 2.0, 3.0)).id();

        app.update();

        let world = app.world();
        let carried = world.get::<Transform>(carried).unwrap().translation;
        let fixed = world.get::<Transform>(fixed).unwrap().translation;
        assert!(carried.abs_diff_eq(Vec3::new(1.0, 252.0, 3.0), 1e-3));
        assert_eq!(fixed, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_side_view_axes() {
        let transform = side_view_transform(4000.0);
        assert!(transform.right().as_vec3().abs_diff_eq(Vec3::Y, 1e-5));
        assert!(transform.up().as_vec3().abs_diff_eq(Vec3::Z, 1e-5));
        assert!(transform.forward().as_vec3().abs_diff_eq(Vec3::NEG_X, 1e-5));
    }
}
