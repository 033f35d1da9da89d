//! Core plugin that sets up game states, events, and the fixed-rate clock.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Logical updates per second. Every frame-count constant in the game
/// (cooldowns, combo windows, lifetimes) assumes this rate.
pub const SIMULATION_HZ: f64 = 60.0;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver)
/// - Global events (AttackIntent, SpecialIntent, DeathEvent)
/// - The 60 Hz `FixedUpdate` clock the simulation runs on
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))

            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<AttackIntent>()
            .add_event::<SpecialIntent>()
            .add_event::<DeathEvent>()

            // Tuning is read during Startup, so go straight to the match
            .add_systems(OnEnter(GameState::Loading), transition_to_game)
            .add_systems(OnEnter(GameState::GameOver), announce_game_over);
    }
}

/// Transition from Loading to InGame.
fn transition_to_game(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

fn announce_game_over() {
    info!("Match over");
}
