//! Kinematic integration system.
//!
//! Updates Position from Velocity each frame: position += velocity.
//! Damping is applied after integration so the ship coasts to a stop.

use hecs::World;

use nave_core::components::{Damping, Ship};
use nave_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
/// A destroyed ship stays where it is.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, ship)) in
        world.query_mut::<(&mut Position, &Velocity, Option<&Ship>)>()
    {
        if ship.is_some_and(|s| s.destroyed) {
            continue;
        }
        pos.0 += vel.0;
    }
}

/// Scale velocities by their damping factor.
pub fn apply_damping(world: &mut World) {
    for (_entity, (vel, damping)) in world.query_mut::<(&mut Velocity, &Damping)>() {
        vel.0 *= damping.factor;
    }
}
