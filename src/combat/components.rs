//! Projectile components and resources.

use bevy::prelude::*;

/// A shot fired by the player ship.
#[derive(Component, Debug)]
pub struct PlayerProjectile {
    /// Flight speed along the projectile's local +Y
    pub speed: f32,
    /// Seconds left before despawning
    pub remaining: f32,
}

impl PlayerProjectile {
    pub fn new(speed: f32, lifetime: f32) -> Self {
        Self {
            speed,
            remaining: lifetime,
        }
    }

    /// Advance the lifetime clock. Returns true once the projectile has expired.
    pub fn tick(&mut self, delta_seconds: f32) -> bool {
        self.remaining -= delta_seconds;
        self.remaining <= 0.0
    }

    /// World-space displacement for one frame.
    pub fn step(&self, transform: &Transform, delta_seconds: f32) -> Vec3 {
        transform.rotation * Vec3::Y * self.speed * delta_seconds
    }
}

/// Shared mesh and material for every player projectile.
#[derive(Resource)]
pub struct ProjectileAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_expires_after_lifetime() {
        let mut projectile = PlayerProjectile::new(4000.0, 0.05);
        assert!(!projectile.tick(0.02));
        assert!(!projectile.tick(0.02));
        assert!(projectile.tick(0.02));
    }

    #[test]
    fn test_projectile_flies_along_local_y() {
        let projectile = PlayerProjectile::new(1000.0, 1.0);
        let step = projectile.step(&Transform::default(), 0.5);
        assert_eq!(step, Vec3::new(0.0, 500.0, 0.0));

        let turned = Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2));
        let step = projectile.step(&turned, 0.5);
        assert!(step.abs_diff_eq(Vec3::new(0.0, 0.0, 500.0), 1e-3));
    }
}
