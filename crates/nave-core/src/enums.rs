//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Round state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities update and collide every frame.
    #[default]
    Playing,
    /// Lives ran out. Nothing updates until a restart.
    GameOver,
}
