//! Player commands produced by the input layer.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Set the ship's rotation rate (radians per frame, 0 stops turning).
    SetRotation { rate: f32 },
    /// Switch forward thrust on or off.
    SetBoosting { boosting: bool },
    /// Spawn a laser at the ship's position along its facing direction.
    FireLaser,
    /// Start a fresh round. Only honoured after game over.
    Restart,
}
