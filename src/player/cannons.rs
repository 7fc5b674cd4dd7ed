//! Round-robin cannon firing.
//!
//! The ship has three firing points that take turns: right, left, top,
//! then back to right.

use bevy::prelude::*;
use std::collections::HashMap;

/// The ship's firing points, in firing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CannonIndex {
    #[default]
    Right,
    Left,
    Top,
}

impl CannonIndex {
    /// Firing order.
    pub const ORDER: [CannonIndex; 3] = [CannonIndex::Right, CannonIndex::Left, CannonIndex::Top];

    /// The cannon that fires after this one.
    pub fn next(self) -> Self {
        match self {
            CannonIndex::Right => CannonIndex::Left,
            CannonIndex::Left => CannonIndex::Top,
            CannonIndex::Top => CannonIndex::Right,
        }
    }

    /// Name of the attachment point on the ship model.
    pub fn socket_name(self) -> &'static str {
        match self {
            CannonIndex::Right => "RightCannon",
            CannonIndex::Left => "LeftCannon",
            CannonIndex::Top => "TopCannon",
        }
    }
}

/// Resolves named attachment points on the ship.
pub trait SocketLookup {
    /// World transform of socket `name` on a ship placed at `root`.
    fn socket_transform(&self, root: &Transform, name: &str) -> Option<Transform>;
}

/// Attachment points stored as transforms relative to the ship origin.
#[derive(Component, Clone, Debug, Default)]
pub struct CannonMounts(pub HashMap<String, Transform>);

impl SocketLookup for CannonMounts {
    fn socket_transform(&self, root: &Transform, name: &str) -> Option<Transform> {
        self.0.get(name).map(|local| root.mul_transform(*local))
    }
}

/// Creates projectiles. Always spawns the player's cannon shot, the only
/// projectile kind the ship fires.
pub trait Spawner {
    type Handle;

    fn spawn_projectile(&mut self, at: Transform) -> Self::Handle;
}

/// Resolve where `current` fires from and which cannon goes next.
///
/// A socket missing from the model yields the identity transform.
pub fn fire<L: SocketLookup + ?Sized>(
    current: CannonIndex,
    root: &Transform,
    sockets: &L,
) -> (Transform, CannonIndex) {
    let name = current.socket_name();
    let transform = sockets.socket_transform(root, name).unwrap_or_else(|| {
        warn!("Cannon socket '{}' not found on ship, firing from origin", name);
        Transform::IDENTITY
    });
    (transform, current.next())
}

/// Tracks which cannon fires next.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannonSequencer {
    next: CannonIndex,
}

impl CannonSequencer {
    pub fn next_cannon(&self) -> CannonIndex {
        self.next
    }

    /// Fire the next cannon and advance to the following one.
    pub fn fire<L, S>(&mut self, root: &Transform, sockets: &L, spawner: &mut S) -> S::Handle
    where
        L: SocketLookup + ?Sized,
        S: Spawner + ?Sized,
    {
        let (at, next) = fire(self.next, root, sockets);
        self.next = next;
        spawner.spawn_projectile(at)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every spawn transform.
    #[derive(Default)]
    pub(crate) struct RecordingSpawner {
        pub spawned: Vec<Transform>,
    }

    impl Spawner for RecordingSpawner {
        type Handle = usize;

        fn spawn_projectile(&mut self, at: Transform) -> usize {
            self.spawned.push(at);
            self.spawned.len() - 1
        }
    }

    pub(crate) fn test_mounts() -> CannonMounts {
        CannonMounts(HashMap::from([
            ("RightCannon".to_string(), Transform::from_xyz(1.0, 10.0, 0.0)),
            ("LeftCannon".to_string(), Transform::from_xyz(-1.0, 10.0, 0.0)),
            ("TopCannon".to_string(), Transform::from_xyz(0.0, 5.0, 3.0)),
        ]))
    }

    #[test]
    fn test_cannon_order_cycles() {
        let mut cannon = CannonIndex::default();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(cannon);
            cannon = cannon.next();
        }
        use CannonIndex::*;
        assert_eq!(seen, vec![Right, Left, Top, Right, Left, Top, Right]);
    }

    #[test]
    fn test_order_matches_next() {
        for (i, cannon) in CannonIndex::ORDER.iter().enumerate() {
            let expected = CannonIndex::ORDER[(i + 1) % CannonIndex::ORDER.len()];
            assert_eq!(cannon.next(), expected);
        }
    }

    #[test]
    fn test_three_shots_use_each_socket_then_wrap() {
        let mounts = test_mounts();
        let root = Transform::from_xyz(0.0, 100.0, 50.0);
        let mut sequencer = CannonSequencer::default();
        let mut spawner = RecordingSpawner::default();

        for _ in 0..3 {
            sequencer.fire(&root, &mounts, &mut spawner);
        }

        let positions: Vec<Vec3> = spawner.spawned.iter().map(|t| t.translation).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(1.0, 110.0, 50.0),
                Vec3::new(-1.0, 110.0, 50.0),
                Vec3::new(0.0, 105.0, 53.0),
            ]
        );
        assert_eq!(sequencer.next_cannon(), CannonIndex::Right);
    }

    #[test]
    fn test_missing_socket_fires_from_identity() {
        let mounts = CannonMounts::default();
        let root = Transform::from_xyz(4.0, 5.0, 6.0);
        let (at, next) = fire(CannonIndex::Top, &root, &mounts);
        assert_eq!(at, Transform::IDENTITY);
        assert_eq!(next, CannonIndex::Right);
    }

    #[test]
    fn test_mounts_follow_root_rotation() {
        let mounts = test_mounts();
        let root = Transform::from_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let at = mounts.socket_transform(&root, "RightCannon").unwrap();
        // (1, 10, 0) rotated 90 degrees about Z.
        assert!(at.translation.abs_diff_eq(Vec3::new(-10.0, 1.0, 0.0), 1e-4));
    }
}
