//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: nothing here touches the world.

use hecs::World;

use nave_core::components::*;
use nave_core::enums::GamePhase;
use nave_core::events::GameEvent;
use nave_core::state::*;
use nave_core::types::{CanvasSize, FrameTime, Position, Velocity};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &FrameTime,
    phase: GamePhase,
    canvas: CanvasSize,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        canvas,
        score: score.score,
        lives: score.lives,
        ship: build_ship(world),
        lasers: build_lasers(world),
        asteroids: build_asteroids(world),
        events,
    }
}

/// Build the ShipView, or `None` when the ship is gone.
fn build_ship(world: &World) -> Option<ShipView> {
    world
        .query::<(&Ship, &Position, &Velocity)>()
        .iter()
        .find(|(_, (ship, _, _))| !ship.destroyed)
        .map(|(_, (ship, pos, vel))| ShipView {
            position: *pos,
            velocity: *vel,
            heading: ship.heading,
            boosting: ship.boosting,
        })
}

/// Build LaserView list, oldest first.
fn build_lasers(world: &World) -> Vec<LaserView> {
    let mut lasers: Vec<(SpawnOrder, LaserView)> = world
        .query::<(&Laser, &Position, &SpawnOrder)>()
        .iter()
        .map(|(_, (_, pos, order))| (*order, LaserView { position: *pos }))
        .collect();

    lasers.sort_by_key(|(order, _)| *order);
    lasers.into_iter().map(|(_, view)| view).collect()
}

/// Build AsteroidView list, oldest first.
fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    let mut asteroids: Vec<(SpawnOrder, AsteroidView)> = world
        .query::<(&Asteroid, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(_, (asteroid, pos, collider, order))| {
            (
                *order,
                AsteroidView {
                    position: *pos,
                    radius: collider.radius,
                    outline: asteroid.outline.clone(),
                },
            )
        })
        .collect();

    asteroids.sort_by_key(|(order, _)| *order);
    asteroids.into_iter().map(|(_, view)| view).collect()
}
