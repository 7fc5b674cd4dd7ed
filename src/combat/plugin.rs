//! Combat plugin - player projectiles.

use bevy::prelude::*;

use super::systems::{advance_projectiles, cleanup_projectiles, setup_projectile_assets};
use crate::core::{FlightSet, GameState};

/// Combat plugin - handles projectile flight and expiry.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_projectile_assets)
            .add_systems(OnExit(GameState::InGame), cleanup_projectiles)
            .add_systems(Update, advance_projectiles.in_set(FlightSet::Projectiles));
    }
}
