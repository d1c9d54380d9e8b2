//! Cleanup system: removes lasers that left the canvas.

use hecs::{Entity, World};

use nave_core::components::Laser;
use nave_core::types::{CanvasSize, Position};

/// Whether a point is outside [0, width] x [0, height] on either axis.
pub fn is_offscreen(pos: &Position, canvas: CanvasSize) -> bool {
    !canvas.contains(pos.0)
}

/// Despawn every off-screen laser. Returns how many were removed.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, canvas: CanvasSize, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (pos, _laser)) in world.query_mut::<(&Position, &Laser)>() {
        if is_offscreen(pos, canvas) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
