//! Game state definitions that control the overall flow of the match.
//!
//! States determine which systems run at any given time. Combat and fighter
//! simulation only run while `InGame`.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while combat tuning is read
/// - Enter `InGame` once the match is set up
/// - `GameOver` when one of the fighters is knocked out
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active match
    InGame,
    /// A fighter has been knocked out
    GameOver,
}
