//! Game engine for NAVE.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod input;
pub mod render;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use nave_core as core;
