//! Player module - the player ship, its bounded movement, and its cannons.

mod bounds;
mod cannons;
mod components;
mod controller;
mod input;
mod movement;
mod plugin;

pub use bounds::{
    effective_speed, try_move, Margins, MoveAxis, MoveDirection, MoveRequest, Projector,
};
pub use cannons::{fire, CannonIndex, CannonMounts, CannonSequencer, SocketLookup, Spawner};
pub use components::*;
pub use controller::ShipController;
pub use movement::spawn_player_ship;
pub use plugin::PlayerPlugin;
