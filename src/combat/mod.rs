//! Combat module - weapons, attack resolution, projectiles, and hit effects.

mod components;
mod effects;
mod error;
mod plugin;
mod projectile;
mod resolver;
mod systems;
mod tuning;
mod weapons;

pub use components::*;
pub use effects::{CombatEffects, HitSpark, WeaponTrail};
pub use error::{CombatError, TuningError};
pub use plugin::CombatPlugin;
pub use projectile::{Projectile, ProjectileKind};
pub use resolver::{AttackResult, CombatResolver, CombatState, Combatant};
pub use systems::{resolve_attacks, CombatSet};
pub use tuning::{CombatTuning, TUNING_PATH};
pub use weapons::{WeaponKind, WeaponProfile};
