//! Bevy systems that drive the ship controller each frame.

use bevy::prelude::*;

use super::cannons::CannonMounts;
use super::components::*;
use super::controller::ShipController;
use crate::combat::{ProjectileAssets, ProjectileSpawner};
use crate::config::ShipConfig;
use crate::core::{FlightSet, GameState};
use crate::stage::{Scrolling, StageCamera, ViewportProjector};

/// Set up player ship systems.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<ShipInput>()
        .add_systems(
            OnEnter(GameState::InGame),
            (reset_progression, spawn_player_ship),
        )
        .add_systems(OnExit(GameState::InGame), despawn_player_ship)
        .add_systems(Update, super::input::read_ship_input.in_set(FlightSet::Input))
        .add_systems(Update, update_player_ship.in_set(FlightSet::Ship));
}

/// Start every run with fresh progression.
fn reset_progression(mut commands: Commands) {
    commands.insert_resource(PlayerProgression::default());
}

/// Spawn the player ship at the stage origin.
pub fn spawn_player_ship(
    mut commands: Commands,
    config: Res<ShipConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let half = config.hull_half_extents();
    let mounts = config.mount_transforms();
    info!("Spawning player ship with {} cannon mounts", mounts.len());

    commands.spawn((
        Name::new("PlayerShip"),
        PlayerShip::new(config.movement_speed),
        CannonMounts(mounts),
        Scrolling,
        Mesh3d(meshes.add(Cuboid::new(half.y, half.x * 2.0, half.y * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.55, 0.65, 0.8))),
        Transform::default(),
    ));
}

fn despawn_player_ship(mut commands: Commands, query: Query<Entity, With<PlayerShip>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Apply this frame's input to the ship.
///
/// Runs after the stage scroll, so the camera and ship transforms are
/// read directly rather than from last frame's `GlobalTransform`.
pub fn update_player_ship(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<ShipInput>,
    config: Res<ShipConfig>,
    progression: Res<PlayerProgression>,
    projectile_assets: Res<ProjectileAssets>,
    camera_query: Query<(&Camera, &Transform), (With<StageCamera>, Without<PlayerShip>)>,
    mut ship_query: Query<(&mut Transform, &mut PlayerShip, &CannonMounts)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Ok((mut transform, mut ship, mounts)) = ship_query.get_single_mut() else {
        return;
    };

    let projector = ViewportProjector::new(
        camera,
        GlobalTransform::from(*camera_transform),
        transform.translation,
        config.hull_half_extents(),
    );
    let controller = ShipController::new(&projector, mounts, config.margins, &progression);
    let mut spawner = ProjectileSpawner::new(&mut commands, &projectile_assets, &config);

    controller.update(
        &mut ship,
        &mut transform,
        &input,
        time.delta_secs(),
        &mut spawner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn test_entering_game_resets_progression() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<GameState>()
            .add_systems(OnEnter(GameState::InGame), reset_progression);
        app.update();

        app.insert_resource(PlayerProgression {
            lives: 0,
            speed_up_level: 7,
            laser_power: 2,
            plasma_bombs: true,
            homing_missiles: true,
            seeker_missiles: true,
        });
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::InGame
        );
        assert_eq!(
            *app.world().resource::<PlayerProgression>(),
            PlayerProgression::default()
        );
    }
}
