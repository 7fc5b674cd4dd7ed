//! Player-related components and resources.

use bevy::prelude::*;

use super::cannons::CannonSequencer;

/// The player's ship. Its position is the entity's `Transform`.
#[derive(Component, Debug)]
pub struct PlayerShip {
    /// Base movement speed in units per second
    pub speed: f32,
    pub cannons: CannonSequencer,
}

impl PlayerShip {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            cannons: CannonSequencer::default(),
        }
    }
}

/// Player progression for the current run.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerProgression {
    pub lives: u32,
    /// Each level adds ten percent to movement speed
    pub speed_up_level: u8,
    pub laser_power: u8,
    pub plasma_bombs: bool,
    pub homing_missiles: bool,
    pub seeker_missiles: bool,
}

impl Default for PlayerProgression {
    fn default() -> Self {
        Self {
            lives: 3,
            speed_up_level: 0,
            laser_power: 0,
            plasma_bombs: false,
            homing_missiles: false,
            seeker_missiles: false,
        }
    }
}

/// Flight controls sampled for the current frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// True only on the frame the fire button goes down
    pub fire: bool,
}
