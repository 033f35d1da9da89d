//! Fighter spawning and match setup.

use bevy::prelude::*;

use super::components::{
    CharacterClass, CpuController, Fighter, FighterConfig, FighterMotion, Opponent,
};
use crate::combat::{CombatResolver, FighterStatus, Health, Hitbox, Stamina, Velocity, Weapon};
use crate::core::GameState;

/// Match setup and resolver cleanup.
pub fn setup_spawning_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_match)
        // Removals must be read every frame, not only on fixed ticks
        .add_systems(PostUpdate, unregister_removed_fighters);
}

/// Spawn a fighter on the ground at `x` and register it with the resolver.
pub fn spawn_fighter(
    commands: &mut Commands,
    resolver: &mut CombatResolver,
    config: &FighterConfig,
    class: CharacterClass,
    x: f32,
) -> Entity {
    let profile = class.profile();

    let entity = commands
        .spawn((
            Fighter { class },
            CpuController::default(),
            FighterMotion {
                facing: if x <= 0.0 { 1.0 } else { -1.0 },
                grounded: true,
            },
            Transform::from_xyz(x, config.ground_y, 0.0),
            Velocity::default(),
            Hitbox::new(config.body_size.x, config.body_size.y),
            Weapon::new(profile.weapon),
            Health::new(config.max_health),
            Stamina::default(),
            FighterStatus::default(),
        ))
        .id();

    resolver.register_combatant(entity);
    entity
}

/// Set up a fresh one-on-one match.
pub fn spawn_match(
    mut commands: Commands,
    config: Res<FighterConfig>,
    mut resolver: ResMut<CombatResolver>,
) {
    resolver.reset();

    let left = spawn_fighter(
        &mut commands,
        &mut resolver,
        &config,
        CharacterClass::Shadow,
        -300.0,
    );
    let right = spawn_fighter(
        &mut commands,
        &mut resolver,
        &config,
        CharacterClass::Tank,
        300.0,
    );

    commands.entity(left).insert(Opponent(right));
    commands.entity(right).insert(Opponent(left));

    info!("Match started: Shadow vs Tank");
}

/// Drop combat state for fighters that no longer exist.
pub fn unregister_removed_fighters(
    mut removed: RemovedComponents<Fighter>,
    mut resolver: ResMut<CombatResolver>,
) {
    for entity in removed.read() {
        resolver.unregister_combatant(entity);
    }
}
