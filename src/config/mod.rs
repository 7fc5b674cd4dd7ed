//! Config module - data-driven tuning for the player ship.

mod error;
mod ship_config;

pub use error::ConfigLoadError;
pub use ship_config::{ShipConfig, SHIP_CONFIG_PATH};
