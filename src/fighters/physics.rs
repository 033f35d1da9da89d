//! Frame-based fighter physics and per-frame timers.

use bevy::prelude::*;

use super::components::{FighterConfig, FighterMotion};
use crate::combat::{ActiveAttack, FighterStatus, HitEvent, Stamina, Velocity, Weapon};

/// Advance one body by one frame: gravity, integration, ground and walls.
pub fn step_body(
    config: &FighterConfig,
    position: &mut Vec3,
    velocity: &mut Velocity,
    motion: &mut FighterMotion,
) {
    velocity.y -= config.gravity;
    position.x += velocity.x;
    position.y += velocity.y;

    if position.y <= config.ground_y {
        position.y = config.ground_y;
        velocity.y = 0.0;
        motion.grounded = true;
    } else {
        motion.grounded = false;
    }

    if motion.grounded {
        velocity.x *= config.friction;
        if velocity.x.abs() < 0.05 {
            velocity.x = 0.0;
        }
    }

    position.x = position
        .x
        .clamp(-config.arena_half_width, config.arena_half_width);
}

/// Apply gravity and velocity to every fighter.
pub fn apply_physics(
    config: Res<FighterConfig>,
    mut query: Query<(&mut Transform, &mut Velocity, &mut FighterMotion)>,
) {
    for (mut transform, mut velocity, mut motion) in query.iter_mut() {
        step_body(&config, &mut transform.translation, &mut velocity, &mut motion);
    }
}

/// Count down stun, recovery, weapon cooldowns and attack frames; regenerate stamina.
pub fn tick_fighter_timers(
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &mut FighterStatus,
        &mut Weapon,
        &mut Stamina,
        Option<&mut ActiveAttack>,
    )>,
) {
    for (entity, mut status, mut weapon, mut stamina, attack) in query.iter_mut() {
        status.tick();
        weapon.tick();
        stamina.regenerate();

        if let Some(mut attack) = attack {
            attack.frames_left = attack.frames_left.saturating_sub(1);
            if attack.frames_left == 0 {
                commands.entity(entity).remove::<ActiveAttack>();
            }
        }
    }
}

/// Stun fighters that were just hit for the weapon's hit-stop.
pub fn apply_hit_stun(
    mut hit_events: EventReader<HitEvent>,
    mut query: Query<&mut FighterStatus>,
) {
    for event in hit_events.read() {
        if !event.result.connected() {
            continue;
        }
        if let Ok(mut status) = query.get_mut(event.defender) {
            status.stun_frames = status.stun_frames.max(event.hit_stop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    use crate::combat::{AttackKind, AttackResult, WeaponKind};

    #[test]
    fn test_airborne_body_falls_to_the_ground() {
        let config = FighterConfig::default();
        let mut position = Vec3::new(0.0, config.ground_y + 50.0, 0.0);
        let mut velocity = Velocity::default();
        let mut motion = FighterMotion::default();

        step_body(&config, &mut position, &mut velocity, &mut motion);
        assert!(!motion.grounded);
        assert_eq!(velocity.y, -0.5);

        for _ in 0..100 {
            step_body(&config, &mut position, &mut velocity, &mut motion);
        }
        assert!(motion.grounded);
        assert_eq!(position.y, config.ground_y);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn test_knockback_slides_to_a_stop() {
        let config = FighterConfig::default();
        let mut position = Vec3::new(0.0, config.ground_y, 0.0);
        let mut velocity = Velocity(Vec2::new(12.0, 0.0));
        let mut motion = FighterMotion::default();

        for _ in 0..60 {
            step_body(&config, &mut position, &mut velocity, &mut motion);
        }
        assert_eq!(velocity.x, 0.0);
        assert!(position.x > 12.0);
        assert!(position.x < 60.0);
    }

    #[test]
    fn test_walls_hold_fighters_in_the_arena() {
        let config = FighterConfig::default();
        let mut position = Vec3::new(config.arena_half_width - 1.0, config.ground_y, 0.0);
        let mut velocity = Velocity(Vec2::new(30.0, 0.0));
        let mut motion = FighterMotion::default();

        step_body(&config, &mut position, &mut velocity, &mut motion);
        assert_eq!(position.x, config.arena_half_width);
    }

    #[test]
    fn test_timers_tick_and_attacks_expire() {
        let mut world = World::new();
        let hitbox = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut stamina = Stamina::default();
        stamina.current = 50.0;
        let mut weapon = Weapon::new(WeaponKind::Sword);
        weapon.start_attack(AttackKind::Light);

        let entity = world
            .spawn((
                FighterStatus {
                    stun_frames: 2,
                    recovery_frames: 0,
                },
                weapon,
                stamina,
                ActiveAttack {
                    frames_left: 1,
                    ..ActiveAttack::new(hitbox, AttackKind::Light)
                },
            ))
            .id();

        world.run_system_once(tick_fighter_timers).unwrap();

        let status = world.get::<FighterStatus>(entity).unwrap();
        assert_eq!(status.stun_frames, 1);
        assert_eq!(world.get::<Weapon>(entity).unwrap().cooldown, 19);
        assert!((world.get::<Stamina>(entity).unwrap().current - 50.2).abs() < 1e-4);
        assert!(world.get::<ActiveAttack>(entity).is_none());
    }

    #[test]
    fn test_hits_stun_the_defender() {
        let mut world = World::new();
        world.init_resource::<Events<HitEvent>>();
        let attacker = world.spawn(FighterStatus::default()).id();
        let defender = world.spawn(FighterStatus::default()).id();

        world.send_event(HitEvent {
            attacker,
            defender,
            result: AttackResult::Normal,
            hit_stop: 8,
        });
        world.send_event(HitEvent {
            attacker: defender,
            defender: attacker,
            result: AttackResult::Whiff,
            hit_stop: 8,
        });
        world.run_system_once(apply_hit_stun).unwrap();

        assert_eq!(world.get::<FighterStatus>(defender).unwrap().stun_frames, 8);
        assert_eq!(world.get::<FighterStatus>(attacker).unwrap().stun_frames, 0);
    }
}
