//! Collision system: laser/asteroid kills and ship/asteroid impacts.
//!
//! Every body is a circle (`Collider`). Hits are collected first and applied
//! afterwards, so nothing is despawned while the world is being scanned.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use nave_core::components::{Asteroid, Collider, Laser, Ship, SpawnOrder};
use nave_core::constants::SHIP_COLLISION_RADIUS;
use nave_core::events::GameEvent;
use nave_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// A laser that destroyed an asteroid this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserHit {
    pub asteroid: Entity,
    pub laser: Entity,
    /// Asteroid centre at the time of the hit.
    pub position: Position,
    /// Asteroid radius at the time of the hit.
    pub radius: f32,
}

/// Circle overlap test: centre distance strictly below the radius sum.
pub fn overlaps(a: &Position, a_radius: f32, b: &Position, b_radius: f32) -> bool {
    a.distance_to(b) < a_radius + b_radius
}

/// Whether a laser at `laser` is inside the asteroid.
pub fn asteroid_hit(asteroid: &Position, radius: f32, laser: &Position) -> bool {
    overlaps(asteroid, radius, laser, 0.0)
}

/// Whether a body at `point` with `radius` touches the ship.
pub fn ship_collides_with(ship: &Position, point: &Position, radius: f32) -> bool {
    overlaps(ship, SHIP_COLLISION_RADIUS, point, radius)
}

/// Pair asteroids with the lasers that destroy them.
///
/// Asteroids and lasers are both scanned newest first. Each asteroid takes the
/// first unused laser inside it, so one laser destroys at most one asteroid
/// and one asteroid falls to at most one laser per frame.
pub fn find_laser_hits(world: &World) -> Vec<LaserHit> {
    let mut asteroids: Vec<(SpawnOrder, Entity, Position, f32)> = world
        .query::<(&Asteroid, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, pos, collider, order))| (*order, entity, *pos, collider.radius))
        .collect();
    asteroids.sort_by(|a, b| b.0.cmp(&a.0));

    let mut lasers: Vec<(SpawnOrder, Entity, Position, f32, bool)> = world
        .query::<(&Laser, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, pos, collider, order))| (*order, entity, *pos, collider.radius, false))
        .collect();
    lasers.sort_by(|a, b| b.0.cmp(&a.0));

    let mut hits = Vec::new();
    for &(_, asteroid, asteroid_pos, radius) in &asteroids {
        let laser = lasers
            .iter_mut()
            .find(|entry| !entry.4 && overlaps(&asteroid_pos, radius, &entry.2, entry.3));
        if let Some(laser) = laser {
            laser.4 = true;
            hits.push(LaserHit {
                asteroid,
                laser: laser.1,
                position: asteroid_pos,
                radius,
            });
        }
    }
    hits
}

/// Resolve laser/asteroid hits: award points, spawn fragments, despawn both
/// bodies. Fragments spawned here are not tested until the next frame.
/// Returns the number of asteroids destroyed.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_spawn_order: &mut u64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    let hits = find_laser_hits(world);
    despawn_buffer.clear();

    for hit in &hits {
        let points = score.award_kill(hit.radius);
        let fragments = world_setup::split_asteroid(rng, hit.position, hit.radius);
        log::debug!(
            "asteroid r={:.1} destroyed at ({:.1}, {:.1}): +{} points, {} fragments",
            hit.radius,
            hit.position.0.x,
            hit.position.0.y,
            points,
            fragments.len()
        );
        events.push(GameEvent::AsteroidDestroyed {
            position: hit.position,
            radius: hit.radius,
            points,
            fragments: fragments.len() as u32,
        });

        for fragment in fragments {
            world_setup::spawn_asteroid(world, fragment, next_spawn_order);
        }
        despawn_buffer.push(hit.asteroid);
        despawn_buffer.push(hit.laser);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    hits.len()
}

/// Find the asteroid the ship is touching, if any.
///
/// Returns `None` when there is no live ship or the ship is invulnerable.
/// Asteroids are checked oldest first and only the first hit is reported.
pub fn find_ship_hit(world: &World) -> Option<Entity> {
    let mut ship_body = None;
    for (_entity, (ship, pos, collider)) in world.query::<(&Ship, &Position, &Collider)>().iter() {
        if !ship.destroyed && !ship.invulnerable {
            ship_body = Some((*pos, collider.radius));
            break;
        }
    }
    let (ship_pos, ship_radius) = ship_body?;

    let mut asteroids: Vec<(SpawnOrder, Entity, Position, f32)> = world
        .query::<(&Asteroid, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, pos, collider, order))| (*order, entity, *pos, collider.radius))
        .collect();
    asteroids.sort_by_key(|a| a.0);

    asteroids
        .into_iter()
        .find(|(_, _, pos, radius)| overlaps(&ship_pos, ship_radius, pos, *radius))
        .map(|(_, entity, _, _)| entity)
}
