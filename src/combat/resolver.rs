//! Combat resolution - whiffs, plain hits, counters and combos.
//!
//! The resolver owns the per-combatant combat state and the effect buffers for
//! one match. Game code hands it short-lived [`Combatant`] views built from
//! ECS components; it decides the outcome, mutates health, velocity and
//! stamina through them, and queues sparks and shake for the renderer.

use std::collections::HashMap;
use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::components::{AttackKind, FighterStatus, Health, Stamina, Velocity, Weapon};
use super::effects::{CombatEffects, HitSpark, WeaponTrail};
use super::error::CombatError;
use super::projectile::Projectile;
use super::tuning::CombatTuning;

const COUNTER_SPARK_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const COMBO_SPARK_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);

/// Outcome of a single attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackResult {
    /// No active hitbox, or it missed the defender
    Whiff,
    Normal,
    /// The defender had just landed a hit and punished the attack
    Counter,
    /// A different move kind followed up inside the combo window
    Combo,
}

impl AttackResult {
    pub fn connected(self) -> bool {
        self != AttackResult::Whiff
    }
}

/// Per-combatant memory kept between attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatState {
    /// Frame on which this combatant last landed a hit
    pub last_hit_frame: Option<u64>,
    pub combo_count: u32,
    /// Frames left before the combo window closes
    pub combo_timer: u32,
    pub last_attack: Option<AttackKind>,
    pub in_attack_animation: bool,
}

/// Borrowed view of a fighter for the duration of one resolution.
pub struct Combatant<'a> {
    pub id: Entity,
    pub position: Vec2,
    pub hitbox: Rect,
    /// Present only during the active frames of an attack
    pub attack_hitbox: Option<Rect>,
    pub weapon: Weapon,
    pub health: &'a mut Health,
    pub stamina: &'a mut Stamina,
    pub velocity: &'a mut Velocity,
    pub status: &'a mut FighterStatus,
}

fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Combat resolver for one match.
#[derive(Resource)]
pub struct CombatResolver {
    tuning: CombatTuning,
    states: HashMap<Entity, CombatState>,
    effects: CombatEffects,
    frame: u64,
    rng: StdRng,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self::new(CombatTuning::default())
    }
}

impl CombatResolver {
    pub fn new(tuning: CombatTuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// Resolver with deterministic spark randomness.
    pub fn with_seed(tuning: CombatTuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tuning: CombatTuning, rng: StdRng) -> Self {
        Self {
            tuning,
            states: HashMap::new(),
            effects: CombatEffects::default(),
            frame: 0,
            rng,
        }
    }

    pub fn tuning(&self) -> &CombatTuning {
        &self.tuning
    }

    pub fn set_tuning(&mut self, tuning: CombatTuning) {
        self.tuning = tuning;
    }

    /// Frames simulated since the match started.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn effects(&self) -> &CombatEffects {
        &self.effects
    }

    pub fn state(&self, id: Entity) -> Option<&CombatState> {
        self.states.get(&id)
    }

    pub fn is_registered(&self, id: Entity) -> bool {
        self.states.contains_key(&id)
    }

    /// Create the combat state for a newly spawned combatant.
    ///
    /// Registering an id twice keeps the existing state.
    pub fn register_combatant(&mut self, id: Entity) -> &CombatState {
        self.states.entry(id).or_default()
    }

    pub fn unregister_combatant(&mut self, id: Entity) -> Option<CombatState> {
        self.states.remove(&id)
    }

    fn snapshot(&self, id: Entity) -> Result<CombatState, CombatError> {
        self.states
            .get(&id)
            .copied()
            .ok_or(CombatError::UnknownCombatant(id))
    }

    fn state_mut(&mut self, id: Entity) -> Result<&mut CombatState, CombatError> {
        self.states
            .get_mut(&id)
            .ok_or(CombatError::UnknownCombatant(id))
    }

    /// Mark a combatant as mid-swing until its attack resolves.
    pub fn declare_attack(&mut self, id: Entity) -> Result<(), CombatError> {
        self.state_mut(id)?.in_attack_animation = true;
        Ok(())
    }

    /// Leave a fading streak along a melee swing.
    pub fn add_trail(&mut self, start: Vec2, end: Vec2, weapon: &Weapon) {
        self.effects.push_trail(WeaponTrail {
            start,
            end,
            color: weapon.profile().trail_color(),
            lifetime: WeaponTrail::LIFETIME,
        });
    }

    /// Decide and apply the outcome of `attacker`'s current attack on `defender`.
    ///
    /// Checks run in priority order: whiff, counter, combo, then a plain hit.
    pub fn resolve_attack(
        &mut self,
        attacker: &mut Combatant<'_>,
        defender: &mut Combatant<'_>,
    ) -> Result<AttackResult, CombatError> {
        let attacker_state = self.snapshot(attacker.id)?;
        let defender_state = self.snapshot(defender.id)?;

        let connected = attacker
            .attack_hitbox
            .is_some_and(|hitbox| overlaps(hitbox, defender.hitbox));

        let result = if !connected {
            self.apply_whiff(attacker)
        } else if self.in_counter_window(&defender_state) && !defender.status.is_stunned() {
            self.apply_counter(attacker, defender)
        } else if attacker_state.combo_timer > 0
            && attacker_state.last_attack != Some(attacker.weapon.current_attack)
        {
            self.apply_combo(attacker, defender, attacker_state.combo_count)
        } else {
            self.apply_normal(attacker, defender)
        };

        let frame = self.frame;
        let state = self.state_mut(attacker.id)?;
        state.in_attack_animation = false;
        if result.connected() {
            state.last_hit_frame = Some(frame);
        }

        debug!(
            "Attack {:?} -> {:?}: {:?} (defender at {:.1} hp)",
            attacker.id, defender.id, result, defender.health.current
        );
        Ok(result)
    }

    fn in_counter_window(&self, state: &CombatState) -> bool {
        state
            .last_hit_frame
            .is_some_and(|landed| self.frame.saturating_sub(landed) < self.tuning.counter_window)
    }

    fn apply_whiff(&mut self, attacker: &mut Combatant<'_>) -> AttackResult {
        attacker.stamina.drain(self.tuning.whiff_stamina_penalty);
        attacker.status.recovery_frames = attacker
            .status
            .recovery_frames
            .max(self.tuning.whiff_recovery_frames);
        AttackResult::Whiff
    }

    fn apply_counter(
        &mut self,
        attacker: &mut Combatant<'_>,
        defender: &mut Combatant<'_>,
    ) -> AttackResult {
        let damage = attacker.weapon.profile().damage;
        defender
            .health
            .take_damage(damage * self.tuning.counter_damage_multiplier);
        attacker
            .health
            .take_damage(damage * self.tuning.counter_recoil_multiplier);

        self.effects.request_shake(self.tuning.counter_shake);
        for _ in 0..self.tuning.counter_spark_count {
            self.burst_spark(defender.position, COUNTER_SPARK_COLOR, 8.0, 25);
        }

        AttackResult::Counter
    }

    fn apply_combo(
        &mut self,
        attacker: &mut Combatant<'_>,
        defender: &mut Combatant<'_>,
        combo_count: u32,
    ) -> AttackResult {
        // Uncapped: every extra link adds another bonus step.
        let multiplier = 1.0 + combo_count as f32 * self.tuning.combo_bonus_per_hit;
        defender
            .health
            .take_damage(attacker.weapon.profile().damage * multiplier);

        for _ in 0..self.tuning.combo_base_sparks + combo_count {
            self.burst_spark(defender.position, COMBO_SPARK_COLOR, 5.0, 20);
        }

        let kind = attacker.weapon.current_attack;
        if let Some(state) = self.states.get_mut(&attacker.id) {
            state.combo_count += 1;
            state.combo_timer = kind.combo_window();
            state.last_attack = Some(kind);
        }

        AttackResult::Combo
    }

    fn apply_normal(
        &mut self,
        attacker: &mut Combatant<'_>,
        defender: &mut Combatant<'_>,
    ) -> AttackResult {
        let profile = attacker.weapon.profile();
        defender.health.take_damage(profile.damage);

        let count = self.rng.gen_range(5..=10);
        for _ in 0..count {
            let spark = HitSpark {
                position: defender.position,
                size: self.rng.gen_range(3..=profile.hit_stop) as f32,
                color: profile.color(),
                lifetime: self.rng.gen_range(10..=20),
                velocity: Vec2::new(self.rng.gen_range(-2.0..=2.0), self.rng.gen_range(0.0..=3.0)),
            };
            self.effects.push_spark(spark);
        }

        let direction = if attacker.position.x < defender.position.x { 1.0 } else { -1.0 };
        defender.velocity.x = profile.knockback * direction;

        self.effects.request_shake(profile.hit_stop as f32);

        let kind = attacker.weapon.current_attack;
        if let Some(state) = self.states.get_mut(&attacker.id) {
            state.combo_timer = kind.combo_window();
            state.last_attack = Some(kind);
        }

        AttackResult::Normal
    }

    /// Apply a projectile that reached `defender`. Returns the damage dealt.
    pub fn resolve_projectile_hit(
        &mut self,
        projectile: &Projectile,
        defender: &mut Combatant<'_>,
    ) -> Result<f32, CombatError> {
        if !self.is_registered(defender.id) {
            return Err(CombatError::UnknownCombatant(defender.id));
        }

        let dealt = defender.health.take_damage(projectile.damage);
        defender.velocity.x = projectile.kind.knockback() * projectile.direction;

        let color = projectile.kind.color();
        for _ in 0..5 {
            self.burst_spark(defender.position, color, 3.0, 12);
        }
        self.effects.request_shake(self.tuning.projectile_shake);

        Ok(dealt)
    }

    /// Spark flying out in a random direction.
    fn burst_spark(&mut self, position: Vec2, color: Color, size: f32, lifetime: u32) {
        let angle: f32 = self.rng.gen_range(0.0..TAU);
        let speed: f32 = self.rng.gen_range(2.0..5.0);
        self.effects.push_spark(HitSpark {
            position,
            size,
            color,
            lifetime,
            velocity: Vec2::from_angle(angle) * speed,
        });
    }

    /// Advance one simulation frame: effects age, combo windows count down.
    pub fn tick(&mut self) {
        self.frame += 1;

        for state in self.states.values_mut() {
            if state.combo_timer > 0 {
                state.combo_timer -= 1;
                if state.combo_timer == 0 {
                    state.combo_count = 0;
                }
            }
        }

        self.effects.tick(self.tuning.shake_decay);
    }

    /// Forget every combatant and effect, keeping the tuning.
    pub fn reset(&mut self) {
        self.states.clear();
        self.effects.clear();
        self.frame = 0;
    }
}
