//! Basic attacks and class specials.

use bevy::prelude::*;

use super::components::{Fighter, FighterConfig, FighterMotion, SpecialAbility};
use crate::combat::{
    ActiveAttack, AttackIntent, AttackKind, CombatResolver, FighterStatus, Projectile,
    ProjectileKind, SpecialIntent, Stamina, Velocity, Weapon,
};

/// Horizontal distance of a blink.
const TELEPORT_DISTANCE: f32 = 150.0;
const SHIELD_BASH_SPEED: f32 = 10.0;
const RAPID_FIRE_ARROWS: u32 = 3;

/// Melee hitbox: 40 units tall, extending `reach` in the facing direction.
pub fn melee_hitbox(position: Vec2, facing: f32, reach: f32) -> Rect {
    let far = position.x + facing * reach;
    Rect::new(position.x, position.y - 20.0, far, position.y + 20.0)
}

/// 80x80 box just in front of a charging fighter.
pub fn shield_bash_hitbox(position: Vec2, facing: f32) -> Rect {
    Rect::from_center_size(
        Vec2::new(position.x + facing * 90.0, position.y),
        Vec2::splat(80.0),
    )
}

/// Where a fighter's shots leave from.
fn muzzle(position: Vec2, facing: f32) -> Vec3 {
    Vec3::new(position.x + facing * 30.0, position.y + 20.0, 1.0)
}

fn spawn_projectile(commands: &mut Commands, projectile: Projectile, at: Vec3) {
    commands.spawn((projectile, Transform::from_translation(at)));
}

/// Start a melee swing on `entity`: attack hitbox, trail and resolver bookkeeping.
fn start_swing(
    commands: &mut Commands,
    resolver: &mut CombatResolver,
    entity: Entity,
    hitbox: Rect,
    kind: AttackKind,
    weapon: &Weapon,
    position: Vec2,
) {
    if let Err(e) = resolver.declare_attack(entity) {
        warn!("Ignoring attack: {}", e);
        return;
    }
    let tip = Vec2::new(
        if hitbox.min.x < position.x { hitbox.min.x } else { hitbox.max.x },
        hitbox.center().y,
    );
    resolver.add_trail(position, tip, weapon);
    commands.entity(entity).insert(ActiveAttack::new(hitbox, kind));
}

/// Turn attack intents into swings or shots.
pub fn perform_basic_attacks(
    mut commands: Commands,
    mut intents: EventReader<AttackIntent>,
    mut resolver: ResMut<CombatResolver>,
    mut query: Query<(&Fighter, &Transform, &FighterMotion, &FighterStatus, &mut Weapon)>,
) {
    for intent in intents.read() {
        let Ok((fighter, transform, motion, status, mut weapon)) = query.get_mut(intent.attacker)
        else {
            continue;
        };

        if !status.can_act() || !weapon.start_attack(intent.kind) {
            continue;
        }

        let position = transform.translation.truncate();
        match fighter.class.basic_projectile() {
            Some(kind) => spawn_projectile(
                &mut commands,
                Projectile::new(kind, intent.attacker, motion.facing),
                muzzle(position, motion.facing),
            ),
            None => start_swing(
                &mut commands,
                &mut resolver,
                intent.attacker,
                melee_hitbox(position, motion.facing, weapon.profile().reach),
                intent.kind,
                &weapon,
                position,
            ),
        }
    }
}

/// Spend stamina on class specials.
pub fn perform_specials(
    mut commands: Commands,
    mut intents: EventReader<SpecialIntent>,
    mut resolver: ResMut<CombatResolver>,
    config: Res<FighterConfig>,
    mut query: Query<(
        &Fighter,
        &mut Transform,
        &FighterMotion,
        &FighterStatus,
        &mut Stamina,
        &mut Velocity,
        &mut Weapon,
    )>,
) {
    for intent in intents.read() {
        let Ok((fighter, mut transform, motion, status, mut stamina, mut velocity, mut weapon)) =
            query.get_mut(intent.fighter)
        else {
            continue;
        };

        if !status.can_act() || !stamina.use_stamina(config.special_cost) {
            continue;
        }

        let facing = motion.facing;
        let position = transform.translation.truncate();

        match fighter.profile().special {
            SpecialAbility::Teleport => {
                transform.translation.x += TELEPORT_DISTANCE * facing;
            }
            SpecialAbility::ShieldBash => {
                velocity.x = SHIELD_BASH_SPEED * facing;
                weapon.current_attack = AttackKind::Special;
                start_swing(
                    &mut commands,
                    &mut resolver,
                    intent.fighter,
                    shield_bash_hitbox(position, facing),
                    AttackKind::Special,
                    &weapon,
                    position,
                );
            }
            SpecialAbility::RapidFire => {
                for i in 0..RAPID_FIRE_ARROWS {
                    let arrow = Projectile::new(ProjectileKind::Arrow, intent.fighter, facing)
                        .with_speed(12.0)
                        .with_damage(10.0);
                    let at = muzzle(position, facing) + Vec3::Y * (i as f32 * 10.0);
                    spawn_projectile(&mut commands, arrow, at);
                }
            }
            SpecialAbility::Fireball => {
                spawn_projectile(
                    &mut commands,
                    Projectile::new(ProjectileKind::Fireball, intent.fighter, facing),
                    muzzle(position, facing),
                );
            }
        }

        debug!("{:?} used {:?}", fighter.class, fighter.profile().special);
    }
}
