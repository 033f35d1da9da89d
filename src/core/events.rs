//! Global events used for cross-system communication.
//!
//! Fighter controllers send intents, the combat systems resolve them and
//! announce the outcome.

use bevy::prelude::*;

/// Move families used by the combo rules.
///
/// A combo only continues when the follow-up attack is of a different kind
/// than the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackKind {
    #[default]
    Light,
    Heavy,
    Special,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [AttackKind::Light, AttackKind::Heavy, AttackKind::Special];

    /// Frames a follow-up attack has to extend the combo after this kind lands.
    pub fn combo_window(self) -> u32 {
        match self {
            AttackKind::Light => 30,
            AttackKind::Heavy => 45,
            AttackKind::Special => 60,
        }
    }
}

/// Sent by a controller when a fighter wants to perform its basic attack.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackIntent {
    /// Fighter starting the attack
    pub attacker: Entity,
    /// Which move family the attack belongs to
    pub kind: AttackKind,
}

/// Sent by a controller when a fighter wants to use its class special.
#[derive(Event, Debug, Clone, Copy)]
pub struct SpecialIntent {
    pub fighter: Entity,
}

/// Sent when a fighter's health reaches 0.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Fighter that died
    pub entity: Entity,
    /// Fighter that dealt the final blow (if any)
    pub killed_by: Option<Entity>,
}
