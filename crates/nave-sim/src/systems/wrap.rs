//! Screen wraparound for entities carrying a `Wrap` component.

use glam::Vec2;
use hecs::World;

use nave_core::components::Wrap;
use nave_core::types::{CanvasSize, Position};

/// Teleport wrapping entities that drifted past an edge to the opposite side.
pub fn run(world: &mut World, canvas: CanvasSize) {
    for (_entity, (pos, wrap)) in world.query_mut::<(&mut Position, &Wrap)>() {
        pos.0 = wrap_point(pos.0, canvas, wrap.margin);
    }
}

/// Wrap a point around the canvas. With margin `m` a point past `width + m`
/// lands on `-m` and a point before `-m` lands on `width + m`; same for y.
pub fn wrap_point(point: Vec2, canvas: CanvasSize, margin: f32) -> Vec2 {
    Vec2::new(
        wrap_axis(point.x, canvas.width, margin),
        wrap_axis(point.y, canvas.height, margin),
    )
}

fn wrap_axis(value: f32, extent: f32, margin: f32) -> f32 {
    if value > extent + margin {
        -margin
    } else if value < -margin {
        extent + margin
    } else {
        value
    }
}
