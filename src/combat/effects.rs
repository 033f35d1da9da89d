//! Hit sparks, weapon trails and screen shake.
//!
//! The resolver is the only producer. Renderers get read-only slices and the
//! current shake value once per frame.

use bevy::prelude::*;

/// Short-lived impact particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSpark {
    pub position: Vec2,
    pub size: f32,
    pub color: Color,
    /// Frames left before the spark disappears
    pub lifetime: u32,
    /// World units per frame
    pub velocity: Vec2,
}

/// Streak left behind by a melee swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponTrail {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
    pub lifetime: u32,
}

impl WeaponTrail {
    pub const LIFETIME: u32 = 10;
}

/// Effect buffers aged once per simulation frame.
#[derive(Debug, Clone, Default)]
pub struct CombatEffects {
    sparks: Vec<HitSpark>,
    trails: Vec<WeaponTrail>,
    screen_shake: f32,
}

impl CombatEffects {
    pub fn sparks(&self) -> &[HitSpark] {
        &self.sparks
    }

    pub fn trails(&self) -> &[WeaponTrail] {
        &self.trails
    }

    pub fn screen_shake(&self) -> f32 {
        self.screen_shake
    }

    pub fn push_spark(&mut self, spark: HitSpark) {
        if spark.lifetime > 0 {
            self.sparks.push(spark);
        }
    }

    pub fn push_trail(&mut self, trail: WeaponTrail) {
        if trail.lifetime > 0 {
            self.trails.push(trail);
        }
    }

    /// Raise the shake to at least `intensity`. Weaker requests never lower it.
    pub fn request_shake(&mut self, intensity: f32) {
        self.screen_shake = self.screen_shake.max(intensity);
    }

    /// Advance all effects by one frame.
    pub fn tick(&mut self, shake_decay: f32) {
        self.sparks.retain_mut(|spark| {
            spark.lifetime -= 1;
            spark.position += spark.velocity;
            spark.lifetime > 0
        });

        self.trails.retain_mut(|trail| {
            trail.lifetime -= 1;
            trail.lifetime > 0
        });

        self.screen_shake = (self.screen_shake - shake_decay).max(0.0);
    }

    pub fn clear(&mut self) {
        self.sparks.clear();
        self.trails.clear();
        self.screen_shake = 0.0;
    }
}
