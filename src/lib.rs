//! Zynaps Reloaded - a side-scrolling space shooter in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states and the per-frame flight schedule
//! - **Config**: Ship tuning loaded from RON
//! - **Player**: The player ship, screen-bounded movement, round-robin cannons
//! - **Stage**: Side-view camera, automatic scrolling, screen projection
//! - **Combat**: Player projectiles
//!
//! Ship logic lives in plain types (`player::try_move`, `player::CannonSequencer`,
//! `player::ShipController`) that talk to the engine through small traits, so it
//! can be driven and tested without an `App`.

pub mod combat;
pub mod config;
pub mod core;
pub mod player;
pub mod stage;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct ZynapsPlugin;

impl Plugin for ZynapsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Tuning data (must be available before any run starts)
            .insert_resource(config::ShipConfig::load())

            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Stage systems
            .add_plugins(stage::StagePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin);
    }
}
