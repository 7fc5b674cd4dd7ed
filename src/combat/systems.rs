//! Projectile systems - asset setup, flight, and expiry.

use bevy::prelude::*;

use super::components::{PlayerProjectile, ProjectileAssets};

/// Create the shared projectile mesh and material.
pub fn setup_projectile_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ProjectileAssets {
        mesh: meshes.add(Sphere::new(18.0)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.8, 0.3),
            unlit: true,
            ..default()
        }),
    });
}

/// Move projectiles and despawn the ones that have expired.
pub fn advance_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut PlayerProjectile)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut projectile) in query.iter_mut() {
        if projectile.tick(dt) {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        let step = projectile.step(&transform, dt);
        transform.translation += step;
    }
}

/// Remove all projectiles when leaving the game.
pub fn cleanup_projectiles(mut commands: Commands, query: Query<Entity, With<PlayerProjectile>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
