//! Combat systems - attack resolution, projectiles, deaths and effect ageing.

use bevy::ecs::query::QueryData;
use bevy::prelude::*;

use super::components::*;
use super::projectile::Projectile;
use super::resolver::{AttackResult, CombatResolver, Combatant};
use super::tuning::CombatTuning;
use crate::core::GameState;
use crate::fighters::Opponent;

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Input,
    Action,
    Damage,
    Feedback,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Resources
        .init_resource::<CombatResolver>()

        // Events
        .add_event::<HitEvent>()

        // Tuning is read once; the match resets the resolver itself
        .add_systems(Startup, load_combat_tuning)

        // System ordering, one pass per 60 Hz frame
        .configure_sets(
            FixedUpdate,
            (
                CombatSet::Input,
                CombatSet::Action,
                CombatSet::Damage,
                CombatSet::Feedback,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )

        // Action systems
        .add_systems(FixedUpdate, resolve_attacks.in_set(CombatSet::Action))

        // Damage systems
        .add_systems(
            FixedUpdate,
            (advance_projectiles, projectile_hits, check_deaths, handle_deaths)
                .chain()
                .in_set(CombatSet::Damage),
        )

        // Feedback systems
        .add_systems(FixedUpdate, tick_effects.in_set(CombatSet::Feedback));
}

/// Everything the resolver needs from a fighter entity.
#[derive(QueryData)]
#[query_data(mutable)]
pub struct CombatantData {
    entity: Entity,
    transform: &'static Transform,
    hitbox: &'static Hitbox,
    attack: Option<&'static mut ActiveAttack>,
    weapon: &'static Weapon,
    health: &'static mut Health,
    stamina: &'static mut Stamina,
    velocity: &'static mut Velocity,
    status: &'static mut FighterStatus,
}

impl CombatantDataItem<'_> {
    fn view(&mut self) -> Combatant<'_> {
        let position = self.transform.translation.truncate();
        Combatant {
            id: self.entity,
            position,
            hitbox: self.hitbox.rect_at(position),
            attack_hitbox: self.attack.as_ref().map(|attack| attack.hitbox),
            weapon: *self.weapon,
            health: &mut *self.health,
            stamina: &mut *self.stamina,
            velocity: &mut *self.velocity,
            status: &mut *self.status,
        }
    }
}

/// Load combat tuning from disk into the resolver.
fn load_combat_tuning(mut resolver: ResMut<CombatResolver>) {
    resolver.set_tuning(CombatTuning::load());
}

/// Resolve each freshly declared attack against the attacker's opponent.
pub fn resolve_attacks(
    mut resolver: ResMut<CombatResolver>,
    opponents: Query<&Opponent>,
    mut fighters: Query<CombatantData, Without<Dead>>,
    mut hit_events: EventWriter<HitEvent>,
) {
    let pending: Vec<(Entity, Entity)> = fighters
        .iter()
        .filter(|fighter| fighter.attack.is_some_and(|attack| !attack.resolved))
        .filter_map(|fighter| {
            let opponent = opponents.get(fighter.entity).ok()?;
            Some((fighter.entity, opponent.0))
        })
        .collect();

    for (attacker, defender) in pending {
        let Ok([mut attacker_data, mut defender_data]) =
            fighters.get_many_mut([attacker, defender])
        else {
            debug!("Attack by {:?} has no living target", attacker);
            continue;
        };

        let result =
            resolver.resolve_attack(&mut attacker_data.view(), &mut defender_data.view());

        if let Some(attack) = attacker_data.attack.as_mut() {
            attack.resolved = true;
        }

        match result {
            Ok(result) => {
                hit_events.send(HitEvent {
                    attacker,
                    defender,
                    result,
                    hit_stop: attacker_data.weapon.profile().hit_stop,
                });
            }
            Err(e) => warn!("Skipping attack: {}", e),
        }
    }
}

/// Move projectiles and despawn the ones that ran out of flight time.
fn advance_projectiles(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Transform, &mut Projectile)>,
) {
    for (entity, mut transform, mut projectile) in query.iter_mut() {
        if let Some(dx) = projectile.step() {
            transform.translation.x += dx;
        }
        if projectile.is_spent() {
            commands.entity(entity).despawn();
        }
    }
}

/// Apply projectiles that overlap a fighter other than their owner.
fn projectile_hits(
    mut commands: Commands,
    mut resolver: ResMut<CombatResolver>,
    projectiles: Query<(Entity, &Transform, &Projectile)>,
    mut fighters: Query<CombatantData, Without<Dead>>,
    mut hit_events: EventWriter<HitEvent>,
) {
    for (projectile_entity, transform, projectile) in projectiles.iter() {
        let hitbox = projectile.hitbox_at(transform.translation.truncate());

        for mut fighter in fighters.iter_mut() {
            if fighter.entity == projectile.owner {
                continue;
            }
            let position = fighter.transform.translation.truncate();
            if fighter.hitbox.rect_at(position).intersect(hitbox).is_empty() {
                continue;
            }

            match resolver.resolve_projectile_hit(projectile, &mut fighter.view()) {
                Ok(_) => {
                    hit_events.send(HitEvent {
                        attacker: projectile.owner,
                        defender: fighter.entity,
                        result: AttackResult::Normal,
                        hit_stop: resolver.tuning().projectile_shake as u32,
                    });
                }
                Err(e) => warn!("Projectile hit ignored: {}", e),
            }
            commands.entity(projectile_entity).despawn();
            break;
        }
    }
}

/// Mark fighters whose health ran out.
fn check_deaths(
    mut commands: Commands,
    query: Query<(Entity, &Health, Option<&Opponent>), (Changed<Health>, Without<Dead>)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for (entity, health, opponent) in query.iter() {
        if health.is_dead() {
            commands.entity(entity).insert(Dead);
            death_events.send(DeathEvent {
                entity,
                killed_by: opponent.map(|opponent| opponent.0),
            });
        }
    }
}

/// End the match on the first knockout.
fn handle_deaths(
    mut death_events: EventReader<DeathEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        info!(
            "Fighter {:?} knocked out by {:?}",
            event.entity, event.killed_by
        );
        next_state.set(GameState::GameOver);
    }
}

/// Age sparks, trails, shake and combo windows.
fn tick_effects(mut resolver: ResMut<CombatResolver>) {
    resolver.tick();
}
