//! Combat module - projectiles fired by the player ship.

mod components;
mod plugin;
mod spawner;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use spawner::ProjectileSpawner;
