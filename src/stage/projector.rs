//! Screen projection through the stage camera.

use bevy::prelude::*;

use crate::player::Projector;

/// Projects world positions through a camera and measures the ship's
/// on-screen size from its hull extents.
pub struct ViewportProjector<'a> {
    camera: &'a Camera,
    camera_transform: GlobalTransform,
    screen_size: Vec2,
}

impl<'a> ViewportProjector<'a> {
    /// `hull_half_extents` are the ship's half sizes along world Y and Z,
    /// measured around `hull_center`.
    pub fn new(
        camera: &'a Camera,
        camera_transform: GlobalTransform,
        hull_center: Vec3,
        hull_half_extents: Vec2,
    ) -> Self {
        let mut projector = Self {
            camera,
            camera_transform,
            screen_size: Vec2::ZERO,
        };
        let corner = Vec3::new(0.0, hull_half_extents.x, hull_half_extents.y);
        if let (Some(a), Some(b)) = (
            projector.to_screen(hull_center - corner),
            projector.to_screen(hull_center + corner),
        ) {
            projector.screen_size = (b - a).abs();
        }
        projector
    }
}

impl Projector for ViewportProjector<'_> {
    fn to_screen(&self, world: Vec3) -> Option<Vec2> {
        self.camera
            .world_to_viewport(&self.camera_transform, world)
            .ok()
    }

    fn entity_screen_size(&self) -> Vec2 {
        self.screen_size
    }

    fn viewport_size(&self) -> Vec2 {
        self.camera.logical_viewport_size().unwrap_or(Vec2::ZERO)
    }
}
