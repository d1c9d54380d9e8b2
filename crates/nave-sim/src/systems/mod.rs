//! ECS systems that operate on the game world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They hold no state of their own; everything lives in components or the engine.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod ship_control;
pub mod snapshot;
pub mod wrap;
