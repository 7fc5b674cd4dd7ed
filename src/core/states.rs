//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Ship movement,
//! scrolling, and projectiles only run while flying.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state before the stage is built
    #[default]
    Loading,
    /// A run is in progress
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
///
/// Pausing keeps the stage and ship alive and only freezes the flight systems.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay - moving, firing, scrolling
    #[default]
    Flying,
    /// Flight systems frozen
    Paused,
}

/// Per-frame ordering of the flight systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlightSet {
    /// Sample controls
    Input,
    /// Advance the stage
    Scroll,
    /// Move the ship and fire
    Ship,
    /// Fly and expire projectiles
    Projectiles,
}
