//! Stage plugin - camera setup and automatic scrolling.

use bevy::prelude::*;

use super::camera::{cleanup_stage, scroll_stage, spawn_stage_camera};
use crate::core::{FlightSet, GameState};

/// Stage plugin - owns the camera the ship is bounded against.
pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), spawn_stage_camera)
            .add_systems(OnExit(GameState::InGame), cleanup_stage)
            .add_systems(Update, scroll_stage.in_set(FlightSet::Scroll));
    }
}
