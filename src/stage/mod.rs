//! Stage module - side-view camera, scrolling, and screen projection.

mod camera;
mod plugin;
mod projector;

pub use camera::{side_view_transform, Scrolling, StageCamera};
pub use plugin::StagePlugin;
pub use projector::ViewportProjector;
