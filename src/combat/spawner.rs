//! Projectile spawning through `Commands`.

use bevy::prelude::*;

use super::components::{PlayerProjectile, ProjectileAssets};
use crate::config::ShipConfig;
use crate::player::Spawner;

/// Spawns player projectiles as entities.
pub struct ProjectileSpawner<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    assets: &'a ProjectileAssets,
    speed: f32,
    lifetime: f32,
}

impl<'a, 'w, 's> ProjectileSpawner<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        assets: &'a ProjectileAssets,
        config: &ShipConfig,
    ) -> Self {
        Self {
            commands,
            assets,
            speed: config.projectile_speed,
            lifetime: config.projectile_lifetime,
        }
    }
}

impl Spawner for ProjectileSpawner<'_, '_, '_> {
    type Handle = Entity;

    fn spawn_projectile(&mut self, at: Transform) -> Entity {
        self.commands
            .spawn((
                Name::new("PlayerProjectile"),
                PlayerProjectile::new(self.speed, self.lifetime),
                Mesh3d(self.assets.mesh.clone()),
                MeshMaterial3d(self.assets.material.clone()),
                at,
            ))
            .id()
    }
}
