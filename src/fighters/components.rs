//! Fighter-related components and class profiles.

use bevy::prelude::*;

use crate::combat::{ProjectileKind, WeaponKind};

/// Playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Shadow,
    Tank,
    Archer,
    Mage,
}

/// What a class does when it spends stamina on its special.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAbility {
    /// Blink forward
    Teleport,
    /// Charge forward behind a large hitbox
    ShieldBash,
    /// Volley of weaker arrows
    RapidFire,
    Fireball,
}

/// Static per-class tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProfile {
    /// Walking speed in units per frame
    pub speed: f32,
    /// Initial upward velocity of a jump
    pub jump_power: f32,
    /// Distance from which the class likes to attack
    pub weapon_range: f32,
    pub weapon: WeaponKind,
    pub special: SpecialAbility,
    pub color: (u8, u8, u8),
}

const SHADOW: ClassProfile = ClassProfile {
    speed: 7.0,
    jump_power: 12.0,
    weapon_range: 120.0,
    weapon: WeaponKind::Sword,
    special: SpecialAbility::Teleport,
    color: (150, 150, 200),
};

const TANK: ClassProfile = ClassProfile {
    speed: 3.0,
    jump_power: 8.0,
    weapon_range: 80.0,
    weapon: WeaponKind::Hammer,
    special: SpecialAbility::ShieldBash,
    color: (200, 100, 100),
};

const ARCHER: ClassProfile = ClassProfile {
    speed: 5.0,
    jump_power: 10.0,
    weapon_range: 200.0,
    weapon: WeaponKind::Gun,
    special: SpecialAbility::RapidFire,
    color: (100, 200, 150),
};

const MAGE: ClassProfile = ClassProfile {
    speed: 4.0,
    jump_power: 9.0,
    weapon_range: 180.0,
    weapon: WeaponKind::Spear,
    special: SpecialAbility::Fireball,
    color: (200, 100, 200),
};

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Shadow,
        CharacterClass::Tank,
        CharacterClass::Archer,
        CharacterClass::Mage,
    ];

    pub fn profile(self) -> &'static ClassProfile {
        match self {
            CharacterClass::Shadow => &SHADOW,
            CharacterClass::Tank => &TANK,
            CharacterClass::Archer => &ARCHER,
            CharacterClass::Mage => &MAGE,
        }
    }

    /// Projectile fired by the basic attack; `None` for melee classes.
    pub fn basic_projectile(self) -> Option<ProjectileKind> {
        match self {
            CharacterClass::Archer => Some(ProjectileKind::Arrow),
            CharacterClass::Mage => Some(ProjectileKind::Fireball),
            CharacterClass::Shadow | CharacterClass::Tank => None,
        }
    }

    pub fn is_ranged(self) -> bool {
        self.basic_projectile().is_some()
    }
}

/// Marker component for fighters, carrying their class.
#[derive(Component, Debug, Clone, Copy)]
pub struct Fighter {
    pub class: CharacterClass,
}

impl Fighter {
    pub fn profile(&self) -> &'static ClassProfile {
        self.class.profile()
    }

    pub fn color(&self) -> Color {
        let (r, g, b) = self.profile().color;
        Color::srgb_u8(r, g, b)
    }
}

/// Facing direction and ground contact.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FighterMotion {
    /// +1.0 facing right, -1.0 facing left
    pub facing: f32,
    pub grounded: bool,
}

impl Default for FighterMotion {
    fn default() -> Self {
        Self {
            facing: 1.0,
            grounded: true,
        }
    }
}

/// The fighter this one is trying to hit.
#[derive(Component, Debug, Clone, Copy)]
pub struct Opponent(pub Entity);

/// CPU-driven fighter.
#[derive(Component, Debug, Default)]
pub struct CpuController {
    /// Frames left in the current walk
    pub walk_frames: u32,
}

/// Arena and physics constants shared by all fighters.
#[derive(Resource, Debug, Clone)]
pub struct FighterConfig {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Lowest y a fighter's centre can reach
    pub ground_y: f32,
    /// Fighters are kept within [-arena_half_width, arena_half_width]
    pub arena_half_width: f32,
    /// Horizontal velocity kept per grounded frame
    pub friction: f32,
    pub max_health: f32,
    /// Body hitbox size
    pub body_size: Vec2,
    pub special_cost: f32,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            ground_y: -220.0,
            arena_half_width: 600.0,
            friction: 0.8,
            max_health: 100.0,
            body_size: Vec2::new(30.0, 80.0),
            special_cost: 20.0,
        }
    }
}
