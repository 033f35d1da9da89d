//! Core game module - states, events, and the simulation clock.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod states;

pub use events::*;
pub use plugin::{CorePlugin, SIMULATION_HZ};
pub use states::*;
