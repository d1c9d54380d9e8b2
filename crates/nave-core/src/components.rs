//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The player's ship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Facing angle in radians. 0 points the nose toward screen-up.
    pub heading: f32,
    /// Heading change applied every frame (radians).
    pub rotation: f32,
    /// Whether forward thrust is applied this frame.
    pub boosting: bool,
    /// Set once the last life is lost; a destroyed ship no longer updates.
    pub destroyed: bool,
    /// Skips the ship/asteroid collision check. Nothing sets it yet.
    pub invulnerable: bool,
}

/// A projectile fired by the ship. Moves at constant velocity until it
/// leaves the canvas or hits an asteroid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Laser;

/// A drifting rock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Jagged outline relative to the asteroid centre.
    pub outline: Vec<Vec2>,
}

/// Circular collision bound shared by every entity kind.
/// Two bodies overlap when their centre distance is below the radius sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
}

/// Screen wraparound. An entity re-enters from the opposite edge once it is
/// more than `margin` beyond the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wrap {
    pub margin: f32,
}

/// Per-frame velocity multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Damping {
    pub factor: f32,
}

/// Monotonic spawn serial. Higher values were spawned later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);
