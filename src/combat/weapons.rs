//! Static weapon profiles.
//!
//! Every weapon kind maps to one immutable profile shared by all fighters
//! wielding it. Frame counts assume the 60 Hz simulation clock.

use bevy::prelude::*;

/// Closed set of weapon kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    Sword,
    Hammer,
    Spear,
    Whip,
    Gun,
}

/// Immutable per-weapon tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    /// Damage of a plain hit
    pub damage: f32,
    /// Horizontal speed given to the defender on a plain hit
    pub knockback: f32,
    /// Frames between two attacks
    pub cooldown: u32,
    /// Hit spark colour as sRGB bytes
    pub spark_color: (u8, u8, u8),
    /// Swing streak colour as sRGB bytes
    pub trail_color: (u8, u8, u8),
    /// Impact weight, used for screen shake, spark size and hit-stun frames
    pub hit_stop: u32,
    /// Length of the weapon's reach in world units
    pub reach: f32,
}

impl WeaponProfile {
    pub fn color(&self) -> Color {
        let (r, g, b) = self.spark_color;
        Color::srgb_u8(r, g, b)
    }

    pub fn trail_color(&self) -> Color {
        let (r, g, b) = self.trail_color;
        Color::srgb_u8(r, g, b)
    }
}

const SWORD: WeaponProfile = WeaponProfile {
    damage: 15.0,
    knockback: 5.0,
    cooldown: 20,
    spark_color: (200, 220, 255),
    trail_color: (100, 200, 255),
    hit_stop: 3,
    reach: 80.0,
};

const HAMMER: WeaponProfile = WeaponProfile {
    damage: 25.0,
    knockback: 12.0,
    cooldown: 40,
    spark_color: (255, 200, 100),
    trail_color: (255, 150, 50),
    hit_stop: 8,
    reach: 60.0,
};

const SPEAR: WeaponProfile = WeaponProfile {
    damage: 20.0,
    knockback: 8.0,
    cooldown: 30,
    spark_color: (150, 255, 150),
    trail_color: (150, 255, 100),
    hit_stop: 5,
    reach: 100.0,
};

const WHIP: WeaponProfile = WeaponProfile {
    damage: 10.0,
    knockback: 4.0,
    cooldown: 15,
    spark_color: (200, 100, 255),
    trail_color: (200, 100, 255),
    hit_stop: 3,
    reach: 120.0,
};

const GUN: WeaponProfile = WeaponProfile {
    damage: 25.0,
    knockback: 6.0,
    cooldown: 60,
    spark_color: (255, 255, 100),
    trail_color: (255, 255, 100),
    hit_stop: 6,
    reach: 200.0,
};

impl WeaponKind {
    pub const ALL: [WeaponKind; 5] = [
        WeaponKind::Sword,
        WeaponKind::Hammer,
        WeaponKind::Spear,
        WeaponKind::Whip,
        WeaponKind::Gun,
    ];

    /// Look up the static profile for this weapon kind.
    pub fn profile(self) -> &'static WeaponProfile {
        match self {
            WeaponKind::Sword => &SWORD,
            WeaponKind::Hammer => &HAMMER,
            WeaponKind::Spear => &SPEAR,
            WeaponKind::Whip => &WHIP,
            WeaponKind::Gun => &GUN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sword_profile() {
        let sword = WeaponKind::Sword.profile();
        assert_eq!(sword.damage, 15.0);
        assert_eq!(sword.knockback, 5.0);
        assert_eq!(sword.cooldown, 20);
        assert_eq!(sword.hit_stop, 3);
        assert_eq!(sword.trail_color, (100, 200, 255));
        assert_ne!(sword.trail_color, sword.spark_color);
    }

    #[test]
    fn test_heavier_weapons_shake_harder() {
        let sword = WeaponKind::Sword.profile();
        let spear = WeaponKind::Spear.profile();
        let hammer = WeaponKind::Hammer.profile();
        assert!(sword.hit_stop < spear.hit_stop);
        assert!(spear.hit_stop < hammer.hit_stop);
        assert!(sword.knockback < hammer.knockback);
    }

    #[test]
    fn test_every_profile_can_spawn_sparks() {
        // Normal-hit spark sizes are drawn from 3..=hit_stop
        for kind in WeaponKind::ALL {
            let profile = kind.profile();
            assert!(profile.hit_stop >= 3, "{kind:?}");
            assert!(profile.damage > 0.0, "{kind:?}");
            assert!(profile.cooldown > 0, "{kind:?}");
        }
    }
}
