//! Screen-bounded ship movement.
//!
//! The stage is viewed from the side: vertical moves change world Z and
//! horizontal moves change world Y. A move is only accepted when the ship,
//! projected to the screen, stays fully inside the margin box on the axis
//! it moved along. Rejected moves leave the position untouched; they are
//! never clamped to the edge.

use bevy::prelude::*;
use serde::Deserialize;

/// Maps world positions to the screen for the bounds check.
pub trait Projector {
    /// Screen position (logical pixels, origin top-left) of a world point,
    /// or `None` if it cannot be projected.
    fn to_screen(&self, world: Vec3) -> Option<Vec2>;
    /// Size of the ship on screen.
    fn entity_screen_size(&self) -> Vec2;
    /// Size of the viewport.
    fn viewport_size(&self) -> Vec2;
}

/// Fixed on-screen distances the ship may not cross.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Margins {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            up: 40.0,
            down: 40.0,
            left: 20.0,
            right: 20.0,
        }
    }
}

impl Margins {
    /// Whether a box centred at `center` fits inside the margins along `axis`.
    pub fn contains(&self, axis: MoveAxis, center: Vec2, size: Vec2, viewport: Vec2) -> bool {
        let half = size / 2.0;
        match axis {
            MoveAxis::Vertical => {
                center.y - half.y >= self.up && center.y + half.y <= viewport.y - self.down
            }
            MoveAxis::Horizontal => {
                center.x - half.x >= self.left && center.x + half.x <= viewport.x - self.right
            }
        }
    }
}

/// Screen axis a move travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveAxis {
    /// Up/down on screen, world Z
    Vertical,
    /// Left/right on screen, world Y
    Horizontal,
}

impl MoveAxis {
    /// Unit vector of the world axis this screen axis moves along.
    pub fn world_axis(self) -> Vec3 {
        match self {
            MoveAxis::Vertical => Vec3::Z,
            MoveAxis::Horizontal => Vec3::Y,
        }
    }
}

/// Sign of a move along its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Up or right
    Positive,
    /// Down or left
    Negative,
}

impl MoveDirection {
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::Positive => 1.0,
            MoveDirection::Negative => -1.0,
        }
    }
}

/// A single axis-aligned move request for one tick.
#[derive(Clone, Copy, Debug)]
pub struct MoveRequest {
    pub axis: MoveAxis,
    pub direction: MoveDirection,
    /// Base speed in world units per second
    pub speed: f32,
    pub speed_up_level: u8,
    pub delta_seconds: f32,
}

impl MoveRequest {
    /// Signed distance travelled along the world axis.
    pub fn offset(&self) -> f32 {
        self.direction.sign() * effective_speed(self.speed, self.speed_up_level) * self.delta_seconds
    }
}

/// Base speed boosted by ten percent per speed-up level.
pub fn effective_speed(speed: f32, speed_up_level: u8) -> f32 {
    speed * (1.0 + f32::from(speed_up_level) / 10.0)
}

/// Compute the next position for `request`, or return `current` if the
/// candidate would leave the margin box.
///
/// Containment is checked on the candidate alone, so a ship already outside
/// the box on an axis (after a window shrink, or when it is larger than the
/// box) cannot move along that axis until the box fits it again.
pub fn try_move<P: Projector + ?Sized>(
    current: Vec3,
    request: &MoveRequest,
    projector: &P,
    margins: &Margins,
) -> Vec3 {
    let candidate = current + request.axis.world_axis() * request.offset();

    let Some(screen) = projector.to_screen(candidate) else {
        trace!("Move {:?} rejected: {} is off camera", request.axis, candidate);
        return current;
    };

    let size = projector.entity_screen_size();
    let viewport = projector.viewport_size();
    if margins.contains(request.axis, screen, size, viewport) {
        candidate
    } else {
        trace!("Move {:?} rejected at screen {}", request.axis, screen);
        let stranded = projector
            .to_screen(current)
            .is_some_and(|at| !margins.contains(request.axis, at, size, viewport));
        if stranded {
            debug!(
                "Ship at {} is outside the {:?} margins of a {} viewport; moves on this axis are blocked",
                current, request.axis, viewport
            );
        }
        current
    }
}
