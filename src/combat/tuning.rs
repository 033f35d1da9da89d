//! Combat tuning loaded from an external RON file.
//!
//! Weapon profiles stay compiled in; these are the rule constants that sit
//! around them (counter window, combo bonus, whiff penalty, shake decay).

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::TuningError;

/// Default location of the tuning file.
pub const TUNING_PATH: &str = "assets/data/combat/tuning.ron";

/// Rule constants for the combat resolver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Frames after landing a hit during which being attacked triggers a counter
    pub counter_window: u64,
    /// Damage multiplier applied to the defender on a counter
    pub counter_damage_multiplier: f32,
    /// Self-damage multiplier applied to the attacker on a counter
    pub counter_recoil_multiplier: f32,
    /// Screen shake requested by a counter (the strongest shake in the game)
    pub counter_shake: f32,
    pub counter_spark_count: u32,
    /// Extra damage fraction per hit already in the combo chain
    pub combo_bonus_per_hit: f32,
    /// Sparks emitted by a combo before the per-hit bonus
    pub combo_base_sparks: u32,
    pub whiff_stamina_penalty: f32,
    /// Frames a fighter cannot act after whiffing
    pub whiff_recovery_frames: u32,
    /// Screen shake lost per frame
    pub shake_decay: f32,
    pub projectile_shake: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            counter_window: 8,
            counter_damage_multiplier: 1.5,
            counter_recoil_multiplier: 0.5,
            counter_shake: 15.0,
            counter_spark_count: 15,
            combo_bonus_per_hit: 0.2,
            combo_base_sparks: 5,
            whiff_stamina_penalty: 10.0,
            whiff_recovery_frames: 10,
            shake_decay: 1.0,
            projectile_shake: 3.0,
        }
    }
}

impl CombatTuning {
    /// Parse tuning from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(path: &str, contents: &str) -> Result<Self, TuningError> {
        ron::from_str(contents).map_err(|e| TuningError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse a tuning file.
    pub fn from_file(path: &str) -> Result<Self, TuningError> {
        let contents = fs::read_to_string(path).map_err(|e| TuningError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(path, &contents)
    }

    /// Load tuning from the default path, falling back to defaults on failure.
    pub fn load() -> Self {
        match Self::from_file(TUNING_PATH) {
            Ok(tuning) => {
                info!("Loaded combat tuning from {}", TUNING_PATH);
                tuning
            }
            Err(e @ TuningError::Parse { .. }) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}
