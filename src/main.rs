//! Zynaps Reloaded - Entry Point
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Space: Fire
//! - Escape: Pause/Unpause

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Zynaps Reloaded".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(zynaps_reloaded::ZynapsPlugin)

        .run();
}
