//! Arrows and fireballs fired by ranged classes.

use bevy::prelude::*;

/// Kinds of projectile, each with fixed flight and impact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    Arrow,
    Fireball,
}

impl ProjectileKind {
    pub fn damage(self) -> f32 {
        match self {
            ProjectileKind::Arrow => 15.0,
            ProjectileKind::Fireball => 25.0,
        }
    }

    /// World units per frame.
    pub fn speed(self) -> f32 {
        match self {
            ProjectileKind::Arrow => 10.0,
            ProjectileKind::Fireball => 8.0,
        }
    }

    pub fn knockback(self) -> f32 {
        match self {
            ProjectileKind::Arrow => 3.0,
            ProjectileKind::Fireball => 6.0,
        }
    }

    pub fn size(self) -> Vec2 {
        match self {
            ProjectileKind::Arrow => Vec2::new(15.0, 5.0),
            ProjectileKind::Fireball => Vec2::new(25.0, 25.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            ProjectileKind::Arrow => Color::srgb_u8(200, 200, 200),
            ProjectileKind::Fireball => Color::srgb_u8(255, 100, 0),
        }
    }
}

/// A projectile in flight. Travels horizontally until it hits or expires.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Fighter that fired it; never hit by its own shots
    pub owner: Entity,
    /// +1.0 to the right, -1.0 to the left
    pub direction: f32,
    pub speed: f32,
    pub damage: f32,
    /// Frames left in flight
    pub lifetime: u32,
}

impl Projectile {
    pub const LIFETIME: u32 = 60;

    pub fn new(kind: ProjectileKind, owner: Entity, direction: f32) -> Self {
        Self {
            kind,
            owner,
            direction: direction.signum(),
            speed: kind.speed(),
            damage: kind.damage(),
            lifetime: Self::LIFETIME,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_damage(mut self, damage: f32) -> Self {
        self.damage = damage;
        self
    }

    /// Advance one frame. Returns the horizontal displacement to apply, or
    /// `None` if the projectile was already spent.
    pub fn step(&mut self) -> Option<f32> {
        if self.is_spent() {
            return None;
        }
        self.lifetime -= 1;
        Some(self.speed * self.direction)
    }

    /// No flight time left; the projectile should be removed.
    pub fn is_spent(&self) -> bool {
        self.lifetime == 0
    }

    pub fn hitbox_at(&self, position: Vec2) -> Rect {
        Rect::from_center_size(position, self.kind.size())
    }
}
