//! Events emitted by the engine for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Something notable that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new round began (initial start or restart).
    RoundStarted { asteroids: u32 },
    /// The ship fired a laser.
    LaserFired { position: Position },
    /// A laser destroyed an asteroid.
    AsteroidDestroyed {
        position: Position,
        radius: f32,
        points: u32,
        fragments: u32,
    },
    /// The ship collided with an asteroid.
    ShipDestroyed { lives_remaining: u32 },
    /// The last life was lost.
    GameOver { final_score: u32 },
}
