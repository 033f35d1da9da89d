//! Error types for combat resolution and tuning data.

use bevy::prelude::Entity;
use thiserror::Error;

/// Errors returned by the combat resolver.
///
/// An attack without an active hitbox is not an error: it resolves as a whiff.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombatError {
    /// The combatant was never registered with the resolver (or was already removed).
    #[error("Combatant {0} is not registered with the combat resolver")]
    UnknownCombatant(Entity),
}

/// Errors that can occur when loading combat tuning data.
#[derive(Debug, Error)]
pub enum TuningError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },
}
