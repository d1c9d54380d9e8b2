//! Ship steering: rotation and thrust.

use glam::Vec2;
use hecs::World;

use nave_core::components::Ship;
use nave_core::constants::SHIP_THRUST;
use nave_core::types::Velocity;

/// Unit vector the ship's nose points along.
/// Heading 0 faces screen-up, so the angle is offset by a quarter turn.
pub fn facing_vector(heading: f32) -> Vec2 {
    Vec2::from_angle(heading - std::f32::consts::FRAC_PI_2)
}

/// Turn every live ship by its rotation rate and apply thrust while boosting.
pub fn run(world: &mut World) {
    for (_entity, (ship, velocity)) in world.query_mut::<(&mut Ship, &mut Velocity)>() {
        if ship.destroyed {
            continue;
        }
        ship.heading += ship.rotation;
        if ship.boosting {
            velocity.0 += facing_vector(ship.heading) * SHIP_THRUST;
        }
    }
}
