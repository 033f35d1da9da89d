//! Fighter plugin - spawning, control, abilities and physics.

use bevy::prelude::*;

use super::abilities;
use super::ai;
use super::components::FighterConfig;
use super::physics;
use super::spawning;
use crate::combat::{resolve_attacks, CombatSet};

/// Fighter plugin - handles everything a fighter does outside combat resolution.
pub struct FighterPlugin;

impl Plugin for FighterPlugin {
    fn build(&self, app: &mut App) {
        spawning::setup_spawning_systems(app);

        app.init_resource::<FighterConfig>()
            .add_systems(FixedUpdate, ai::cpu_control.in_set(CombatSet::Input))
            .add_systems(
                FixedUpdate,
                (abilities::perform_basic_attacks, abilities::perform_specials)
                    .in_set(CombatSet::Action)
                    .before(resolve_attacks),
            )
            .add_systems(
                FixedUpdate,
                (
                    physics::apply_hit_stun,
                    physics::tick_fighter_timers,
                    physics::apply_physics,
                )
                    .chain()
                    .in_set(CombatSet::Feedback),
            );
    }
}
