//! Fighters module - classes, control, abilities and physics.

mod abilities;
mod ai;
mod components;
mod physics;
mod plugin;
mod spawning;

pub use abilities::{melee_hitbox, shield_bash_hitbox};
pub use components::*;
pub use physics::step_body;
pub use plugin::FighterPlugin;
pub use spawning::spawn_fighter;
