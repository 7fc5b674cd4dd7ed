//! Core plugin that sets up game states and the flight schedule.

use bevy::prelude::*;

use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the Flying/Paused sub-state
/// - Ordering of the flight system sets
/// - Pause toggling
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Flight systems run in order, only while flying
            .configure_sets(
                Update,
                (
                    FlightSet::Input,
                    FlightSet::Scroll,
                    FlightSet::Ship,
                    FlightSet::Projectiles,
                )
                    .chain()
                    .run_if(in_state(PlayState::Flying)),
            )

            // Nothing to load yet beyond the config read at startup
            .add_systems(OnEnter(GameState::Loading), start_game)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)));
    }
}

/// Transition from Loading straight into a run.
fn start_game(mut next_state: ResMut<NextState<GameState>>) {
    info!("Starting run");
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Flying => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Flying),
        }
    }
}
