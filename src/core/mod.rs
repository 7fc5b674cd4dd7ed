//! Core game module - states and the flight schedule.
//!
//! This module provides the foundation that all other game systems build upon.

mod plugin;
mod states;

pub use plugin::CorePlugin;
pub use states::*;
