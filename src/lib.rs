//! StickClash - a 2D side-view stick figure fighting game in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, the 60 Hz simulation clock
//! - **Combat**: Weapons, attack resolution, projectiles, hit effects
//! - **Fighters**: Classes, CPU control, abilities, physics
//! - **Rendering**: Camera shake and gizmo drawing

pub mod combat;
pub mod core;
pub mod fighters;
pub mod rendering;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct StickClashPlugin;

impl Plugin for StickClashPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Fighter systems
            .add_plugins(fighters::FighterPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin);
    }
}
