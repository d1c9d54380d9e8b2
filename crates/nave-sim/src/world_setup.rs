//! Entity spawn factories for setting up the game world.
//!
//! Creates the ship, lasers and asteroids with their component bundles.
//! Every spawn takes the next serial from `next_spawn_order`.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nave_core::components::*;
use nave_core::constants::*;
use nave_core::types::{CanvasSize, Position, Velocity};

use crate::systems::ship_control::facing_vector;

/// Everything needed to spawn one asteroid. Produced by `roll_asteroid`
/// and `split_asteroid` so the randomness can be inspected before spawning.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidSpawn {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f32,
    pub outline: Vec<Vec2>,
}

fn next_order(next_spawn_order: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*next_spawn_order);
    *next_spawn_order += 1;
    order
}

/// Spawn the player's ship at rest, nose up.
pub fn spawn_ship(world: &mut World, position: Position, next_spawn_order: &mut u64) -> Entity {
    world.spawn((
        Ship::default(),
        position,
        Velocity::default(),
        Collider {
            radius: SHIP_COLLISION_RADIUS,
        },
        Wrap { margin: 0.0 },
        Damping {
            factor: SHIP_DAMPING,
        },
        next_order(next_spawn_order),
    ))
}

/// Spawn a laser at `origin` travelling along the facing direction for `heading`.
pub fn spawn_laser(
    world: &mut World,
    origin: Position,
    heading: f32,
    next_spawn_order: &mut u64,
) -> Entity {
    let velocity = Velocity(facing_vector(heading) * LASER_SPEED);
    world.spawn((
        Laser,
        origin,
        velocity,
        Collider { radius: 0.0 },
        next_order(next_spawn_order),
    ))
}

/// Spawn an asteroid from a rolled description.
pub fn spawn_asteroid(world: &mut World, spawn: AsteroidSpawn, next_spawn_order: &mut u64) -> Entity {
    world.spawn((
        Asteroid {
            outline: spawn.outline,
        },
        spawn.position,
        spawn.velocity,
        Collider {
            radius: spawn.radius,
        },
        Wrap {
            margin: spawn.radius,
        },
        next_order(next_spawn_order),
    ))
}

/// Uniformly distributed unit vector.
pub fn random_direction(rng: &mut ChaCha8Rng) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

/// Jagged outline: 7 to 11 vertices evenly spaced in angle, each pushed
/// in or out by up to `ASTEROID_VERTEX_JITTER`.
pub fn asteroid_outline(rng: &mut ChaCha8Rng, radius: f32) -> Vec<Vec2> {
    let total = rng.gen_range(ASTEROID_MIN_VERTICES..ASTEROID_MAX_VERTICES);
    (0..total)
        .map(|i| {
            let angle = i as f32 / total as f32 * TAU;
            let r = radius + rng.gen_range(-ASTEROID_VERTEX_JITTER..ASTEROID_VERTEX_JITTER);
            Vec2::from_angle(angle) * r
        })
        .collect()
}

/// Roll a drifting asteroid of the given radius at `position`.
pub fn roll_asteroid(rng: &mut ChaCha8Rng, position: Position, radius: f32) -> AsteroidSpawn {
    let speed = rng.gen_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
    let velocity = Velocity(random_direction(rng) * speed);
    AsteroidSpawn {
        position,
        velocity,
        radius,
        outline: asteroid_outline(rng, radius),
    }
}

/// Fragments left behind by a destroyed asteroid.
///
/// Rocks at or below `ASTEROID_SPLIT_THRESHOLD` crumble to nothing. Larger ones
/// leave two half-radius fragments at the same position, each with its own
/// velocity and outline.
pub fn split_asteroid(rng: &mut ChaCha8Rng, position: Position, radius: f32) -> Vec<AsteroidSpawn> {
    if radius <= ASTEROID_SPLIT_THRESHOLD {
        return Vec::new();
    }
    (0..ASTEROID_FRAGMENT_COUNT)
        .map(|_| roll_asteroid(rng, position, radius / 2.0))
        .collect()
}

/// Pick a uniformly random point on the canvas at least `SPAWN_SAFE_DISTANCE`
/// from `avoid`. Redraws until the constraint holds.
pub fn safe_spawn_position(rng: &mut ChaCha8Rng, canvas: CanvasSize, avoid: Position) -> Position {
    loop {
        let candidate = Position::new(
            rng.gen_range(0.0..canvas.width),
            rng.gen_range(0.0..canvas.height),
        );
        if candidate.distance_to(&avoid) >= SPAWN_SAFE_DISTANCE {
            return candidate;
        }
    }
}

/// Spawn the opening asteroid field around the ship spawn point.
pub fn spawn_initial_asteroids(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    canvas: CanvasSize,
    ship_spawn: Position,
    count: usize,
    next_spawn_order: &mut u64,
) {
    for _ in 0..count {
        let position = safe_spawn_position(rng, canvas, ship_spawn);
        let radius = rng.gen_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS);
        let spawn = roll_asteroid(rng, position, radius);
        spawn_asteroid(world, spawn, next_spawn_order);
    }
}
