//! Combat-related components.

use bevy::prelude::*;

use super::resolver::AttackResult;
use super::weapons::{WeaponKind, WeaponProfile};

// Re-export from core to avoid duplication
pub use crate::core::{AttackIntent, AttackKind, DeathEvent, SpecialIntent};

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Apply damage, clamping at 0. Returns the damage actually removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.maximum
    }
}

/// Stamina resource for combat actions, regenerated per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Stamina {
    pub current: f32,
    pub maximum: f32,
    pub regen_per_frame: f32,
}

impl Default for Stamina {
    fn default() -> Self {
        Self {
            current: 100.0,
            maximum: 100.0,
            regen_per_frame: 0.2,
        }
    }
}

impl Stamina {
    /// Spend stamina only if enough is available.
    pub fn use_stamina(&mut self, amount: f32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }

    /// Remove stamina unconditionally (penalties), clamping at 0.
    pub fn drain(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn regenerate(&mut self) {
        self.current = (self.current + self.regen_per_frame).min(self.maximum);
    }
}

/// Linear velocity in world units per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// Body hitbox, centred on the entity's translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub half_size: Vec2,
}

impl Hitbox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_size: Vec2::new(width, height) / 2.0,
        }
    }

    /// World-space rectangle for a body at `position`.
    pub fn rect_at(&self, position: Vec2) -> Rect {
        Rect::from_center_half_size(position, self.half_size)
    }
}

/// Attack hitbox, present only during the active frames of an attack.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActiveAttack {
    pub hitbox: Rect,
    pub kind: AttackKind,
    pub frames_left: u32,
    /// Set once the resolver has decided this attack
    pub resolved: bool,
}

impl ActiveAttack {
    /// Frames an attack hitbox stays out.
    pub const ACTIVE_FRAMES: u32 = 6;

    pub fn new(hitbox: Rect, kind: AttackKind) -> Self {
        Self {
            hitbox,
            kind,
            frames_left: Self::ACTIVE_FRAMES,
            resolved: false,
        }
    }
}

/// Stun and recovery counters owned by the fighter.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct FighterStatus {
    /// Frames of hit-stun remaining
    pub stun_frames: u32,
    /// Frames remaining before the fighter can act again
    pub recovery_frames: u32,
}

impl FighterStatus {
    pub fn is_stunned(&self) -> bool {
        self.stun_frames > 0
    }

    pub fn can_act(&self) -> bool {
        self.stun_frames == 0 && self.recovery_frames == 0
    }

    pub fn tick(&mut self) {
        self.stun_frames = self.stun_frames.saturating_sub(1);
        self.recovery_frames = self.recovery_frames.saturating_sub(1);
    }
}

/// Equipped weapon and the move currently being swung.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub current_attack: AttackKind,
    /// Frames until the weapon can swing again
    pub cooldown: u32,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            current_attack: AttackKind::default(),
            cooldown: 0,
        }
    }

    pub fn profile(&self) -> &'static WeaponProfile {
        self.kind.profile()
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Begin a swing of `kind`. Fails while the weapon is cooling down.
    pub fn start_attack(&mut self, kind: AttackKind) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.cooldown = self.profile().cooldown;
        self.current_attack = kind;
        true
    }

    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

/// Sent after the resolver decided an attack.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub attacker: Entity,
    pub defender: Entity,
    pub result: AttackResult,
    /// Weapon hit-stop of the attack, used for hit-stun
    pub hit_stop: u32,
}

/// Marker component for fighters that have been knocked out.
#[derive(Component)]
pub struct Dead;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_never_goes_negative() {
        let mut health = Health::new(100.0);
        assert_eq!(health.take_damage(30.0), 30.0);
        assert_eq!(health.current, 70.0);

        assert_eq!(health.take_damage(500.0), 70.0);
        assert_eq!(health.current, 0.0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_negative_damage_is_ignored() {
        let mut health = Health::new(100.0);
        health.take_damage(-5.0);
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut health = Health::new(100.0);
        health.take_damage(10.0);
        assert_eq!(health.heal(50.0), 10.0);
        assert_eq!(health.current, 100.0);
        assert_eq!(health.percentage(), 1.0);
    }

    #[test]
    fn test_stamina_spend_and_regen() {
        let mut stamina = Stamina::default();
        assert!(stamina.use_stamina(90.0));
        assert!(!stamina.use_stamina(20.0));
        assert_eq!(stamina.current, 10.0);

        stamina.drain(25.0);
        assert_eq!(stamina.current, 0.0);

        for _ in 0..10 {
            stamina.regenerate();
        }
        assert!((stamina.current - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_weapon_cooldown() {
        let mut weapon = Weapon::new(WeaponKind::Sword);
        assert!(weapon.start_attack(AttackKind::Heavy));
        assert_eq!(weapon.current_attack, AttackKind::Heavy);
        assert_eq!(weapon.cooldown, 20);
        assert!(!weapon.start_attack(AttackKind::Light));

        for _ in 0..20 {
            weapon.tick();
        }
        assert!(weapon.start_attack(AttackKind::Light));
    }

    #[test]
    fn test_status_blocks_actions_until_expired() {
        let mut status = FighterStatus {
            stun_frames: 1,
            recovery_frames: 2,
        };
        assert!(status.is_stunned());
        assert!(!status.can_act());
        status.tick();
        assert!(!status.is_stunned());
        assert!(!status.can_act());
        status.tick();
        assert!(status.can_act());
    }

    #[test]
    fn test_hitbox_rect_is_centred() {
        let hitbox = Hitbox::new(30.0, 80.0);
        let rect = hitbox.rect_at(Vec2::new(100.0, 50.0));
        assert_eq!(rect.min, Vec2::new(85.0, 10.0));
        assert_eq!(rect.max, Vec2::new(115.0, 90.0));
    }
}
