//! CPU opponent behaviour.
//!
//! Every decision is an independent per-frame dice roll.

use bevy::ecs::query::QueryData;
use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::components::{CpuController, Fighter, FighterConfig, FighterMotion, Opponent};
use crate::combat::{
    AttackIntent, AttackKind, Dead, FighterStatus, SpecialIntent, Stamina, Velocity,
};

const WALK_CHANCE: f64 = 0.02;
const WALK_FRAMES: u32 = 20;
const JUMP_CHANCE: f64 = 0.01;
const ATTACK_CHANCE: f64 = 0.05;
const SPECIAL_CHANCE: f64 = 0.01;

/// A CPU-driven fighter and the state its controller steers.
#[derive(QueryData)]
#[query_data(mutable)]
pub struct CpuFighter {
    entity: Entity,
    fighter: &'static Fighter,
    transform: &'static Transform,
    status: &'static FighterStatus,
    stamina: &'static Stamina,
    opponent: &'static Opponent,
    motion: &'static mut FighterMotion,
    velocity: &'static mut Velocity,
    controller: &'static mut CpuController,
}

/// Drive every CPU fighter toward its opponent and roll for attacks.
pub fn cpu_control(
    config: Res<FighterConfig>,
    mut fighters: Query<CpuFighter, Without<Dead>>,
    positions: Query<&Transform, With<Fighter>>,
    mut attacks: EventWriter<AttackIntent>,
    mut specials: EventWriter<SpecialIntent>,
) {
    let mut rng = rand::thread_rng();

    for mut cpu in fighters.iter_mut() {
        let Ok(target) = positions.get(cpu.opponent.0) else {
            continue;
        };

        let dx = target.translation.x - cpu.transform.translation.x;
        if dx != 0.0 {
            cpu.motion.facing = dx.signum();
        }

        if !cpu.status.can_act() {
            cpu.controller.walk_frames = 0;
            continue;
        }

        let profile = cpu.fighter.profile();

        if cpu.controller.walk_frames == 0 && rng.gen_bool(WALK_CHANCE) {
            cpu.controller.walk_frames = WALK_FRAMES;
        }
        if cpu.controller.walk_frames > 0 {
            cpu.controller.walk_frames -= 1;
            if dx.abs() > profile.weapon_range * 0.5 {
                cpu.velocity.x = profile.speed * cpu.motion.facing;
            }
        }

        if cpu.motion.grounded && rng.gen_bool(JUMP_CHANCE) {
            cpu.velocity.y = profile.jump_power;
        }

        if dx.abs() <= profile.weapon_range && rng.gen_bool(ATTACK_CHANCE) {
            let kind = AttackKind::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or_default();
            attacks.send(AttackIntent {
                attacker: cpu.entity,
                kind,
            });
        }

        if cpu.stamina.current >= config.special_cost && rng.gen_bool(SPECIAL_CHANCE) {
            specials.send(SpecialIntent { fighter: cpu.entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    use super::super::components::CharacterClass;

    fn arena() -> World {
        let mut world = World::new();
        world.init_resource::<FighterConfig>();
        world.init_resource::<Events<AttackIntent>>();
        world.init_resource::<Events<SpecialIntent>>();
        world
    }

    /// Shadow CPU at `x` facing an idle Tank at `target_x`.
    fn spawn_pair(world: &mut World, x: f32, target_x: f32) -> (Entity, Entity) {
        let target = world
            .spawn((
                Fighter { class: CharacterClass::Tank },
                Transform::from_xyz(target_x, 0.0, 0.0),
            ))
            .id();
        let cpu = world
            .spawn((
                Fighter { class: CharacterClass::Shadow },
                Transform::from_xyz(x, 0.0, 0.0),
                FighterStatus::default(),
                Stamina {
                    current: 0.0,
                    ..default()
                },
                Opponent(target),
                FighterMotion::default(),
                Velocity::default(),
                CpuController::default(),
            ))
            .id();
        (cpu, target)
    }

    fn intent_counts(world: &World) -> (usize, usize) {
        let attacks = world.resource::<Events<AttackIntent>>();
        let specials = world.resource::<Events<SpecialIntent>>();
        (
            attacks.get_cursor().read(attacks).count(),
            specials.get_cursor().read(specials).count(),
        )
    }

    #[test]
    fn test_cpu_turns_to_face_its_opponent() {
        let mut world = arena();
        let (cpu, _) = spawn_pair(&mut world, 0.0, -500.0);

        world.run_system_once(cpu_control).unwrap();

        assert_eq!(world.get::<FighterMotion>(cpu).unwrap().facing, -1.0);
    }

    #[test]
    fn test_walking_cpu_closes_the_distance() {
        let mut world = arena();
        let (cpu, _) = spawn_pair(&mut world, 0.0, 500.0);
        world.get_mut::<CpuController>(cpu).unwrap().walk_frames = 5;

        world.run_system_once(cpu_control).unwrap();

        assert_eq!(world.get::<Velocity>(cpu).unwrap().x, 7.0);
        assert_eq!(world.get::<CpuController>(cpu).unwrap().walk_frames, 4);
    }

    #[test]
    fn test_cpu_out_of_range_without_stamina_never_attacks() {
        let mut world = arena();
        spawn_pair(&mut world, 0.0, 500.0);

        for _ in 0..300 {
            world.run_system_once(cpu_control).unwrap();
        }

        assert_eq!(intent_counts(&world), (0, 0));
    }

    #[test]
    fn test_cpu_in_range_eventually_attacks() {
        let mut world = arena();
        let (cpu, _) = spawn_pair(&mut world, 0.0, 60.0);

        // Chance of no attack in 500 frames is 0.95^500
        for _ in 0..500 {
            world.run_system_once(cpu_control).unwrap();
        }

        let attacks = world.resource::<Events<AttackIntent>>();
        let sent: Vec<_> = attacks.get_cursor().read(attacks).copied().collect();
        assert!(!sent.is_empty());
        assert!(sent.iter().all(|intent| intent.attacker == cpu));
    }

    #[test]
    fn test_stunned_cpu_holds_still() {
        let mut world = arena();
        let (cpu, _) = spawn_pair(&mut world, 0.0, 60.0);
        world.get_mut::<FighterStatus>(cpu).unwrap().stun_frames = 1_000;
        world.get_mut::<Stamina>(cpu).unwrap().current = 100.0;
        world.get_mut::<CpuController>(cpu).unwrap().walk_frames = 5;

        for _ in 0..300 {
            world.run_system_once(cpu_control).unwrap();
        }

        assert_eq!(intent_counts(&world), (0, 0));
        assert_eq!(*world.get::<Velocity>(cpu).unwrap(), Velocity::default());
        assert_eq!(world.get::<CpuController>(cpu).unwrap().walk_frames, 0);
    }

    #[test]
    fn test_dead_cpu_is_ignored() {
        let mut world = arena();
        let (cpu, _) = spawn_pair(&mut world, 0.0, -500.0);
        world.entity_mut(cpu).insert(Dead);

        world.run_system_once(cpu_control).unwrap();

        assert_eq!(world.get::<FighterMotion>(cpu).unwrap().facing, 1.0);
    }
}
