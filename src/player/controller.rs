//! Per-frame ship logic, independent of the ECS.
//!
//! `ShipController` borrows the collaborators a ship needs for one tick
//! (a projector, its firing sockets, the margins and the current speed-up
//! level) and applies one frame of input to the ship.

use bevy::prelude::*;

use super::bounds::{try_move, Margins, MoveAxis, MoveDirection, MoveRequest, Projector};
use super::cannons::{SocketLookup, Spawner};
use super::components::{PlayerProgression, PlayerShip, ShipInput};

pub struct ShipController<'a, P: ?Sized, L: ?Sized> {
    projector: &'a P,
    sockets: &'a L,
    margins: Margins,
    speed_up_level: u8,
}

impl<'a, P, L> ShipController<'a, P, L>
where
    P: Projector + ?Sized,
    L: SocketLookup + ?Sized,
{
    pub fn new(
        projector: &'a P,
        sockets: &'a L,
        margins: Margins,
        progression: &PlayerProgression,
    ) -> Self {
        Self {
            projector,
            sockets,
            margins,
            speed_up_level: progression.speed_up_level,
        }
    }

    /// Apply one frame of input: each held direction is an independent
    /// bounded move, then fire if requested. Returns the spawned projectile.
    pub fn update<S: Spawner + ?Sized>(
        &self,
        ship: &mut PlayerShip,
        transform: &mut Transform,
        input: &ShipInput,
        delta_seconds: f32,
        spawner: &mut S,
    ) -> Option<S::Handle> {
        let moves = [
            (input.up, MoveAxis::Vertical, MoveDirection::Positive),
            (input.down, MoveAxis::Vertical, MoveDirection::Negative),
            (input.left, MoveAxis::Horizontal, MoveDirection::Negative),
            (input.right, MoveAxis::Horizontal, MoveDirection::Positive),
        ];

        for (held, axis, direction) in moves {
            if !held {
                continue;
            }
            let request = MoveRequest {
                axis,
                direction,
                speed: ship.speed,
                speed_up_level: self.speed_up_level,
                delta_seconds,
            };
            transform.translation =
                try_move(transform.translation, &request, self.projector, &self.margins);
        }

        if input.fire {
            let cannon = ship.cannons.next_cannon();
            let handle = ship.cannons.fire(transform, self.sockets, spawner);
            debug!("Fired {:?} cannon", cannon);
            Some(handle)
        } else {
            None
        }
    }
}
