//! Game state snapshot: the complete visible state handed to the renderer
//! after each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{CanvasSize, FrameTime, Position, Velocity};

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: FrameTime,
    pub phase: GamePhase,
    pub canvas: CanvasSize,
    pub score: u32,
    pub lives: u32,
    /// `None` once the ship has been destroyed for good.
    pub ship: Option<ShipView>,
    pub lasers: Vec<LaserView>,
    pub asteroids: Vec<AsteroidView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// The ship as the renderer sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub velocity: Velocity,
    pub heading: f32,
    pub boosting: bool,
}

/// A laser in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaserView {
    pub position: Position,
}

/// An asteroid with its outline relative to `position`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Position,
    pub radius: f32,
    pub outline: Vec<Vec2>,
}
