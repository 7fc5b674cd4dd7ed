//! Player plugin - ship spawning, input, movement, and firing.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles the player ship.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);

        app.init_resource::<super::PlayerProgression>();
    }
}
