//! Frame driver: feeds keys to the engine, ticks at a fixed rate and draws.
//!
//! macroquad calls back once per display refresh. The engine is ticked
//! `FRAME_RATE` times per second regardless, using an accumulator over the
//! measured frame time.

use macroquad::time::get_frame_time;
use macroquad::window::next_frame;

use nave_core::constants::FRAME_RATE;
use nave_core::state::GameStateSnapshot;
use nave_sim::render::draw_frame;
use nave_sim::GameEngine;

use crate::canvas::MacroquadCanvas;
use crate::config::AppConfig;
use crate::input;

/// Seconds per engine tick.
pub const TICK_SECONDS: f32 = 1.0 / FRAME_RATE as f32;

/// Ticks to run for `elapsed` seconds of accumulated time.
///
/// Returns the tick count and the leftover time. When the backlog grows past
/// a few ticks (window dragged, debugger paused) it is dropped instead of
/// replayed.
pub fn ticks_due(elapsed: f32) -> (u32, f32) {
    const MAX_CATCH_UP: u32 = 4;
    let due = (elapsed / TICK_SECONDS) as u32;
    if due > MAX_CATCH_UP {
        (1, 0.0)
    } else {
        (due, elapsed - due as f32 * TICK_SECONDS)
    }
}

/// Run the game until the window closes.
pub async fn run(config: AppConfig) {
    log::info!(
        "starting {}x{} game, seed {}",
        config.sim.canvas.width,
        config.sim.canvas.height,
        config.sim.seed
    );

    let mut engine = GameEngine::new(config.sim);
    let mut canvas = MacroquadCanvas::new();
    let mut latest: Option<GameStateSnapshot> = None;
    let mut accumulator = TICK_SECONDS;

    loop {
        // 1. Key transitions become queued commands
        for event in input::poll_key_events() {
            engine.handle_key(event);
        }

        // 2. Advance the engine at the fixed rate
        let (ticks, leftover) = ticks_due(accumulator);
        accumulator = leftover;
        for _ in 0..ticks {
            latest = Some(engine.tick());
        }

        // 3. Draw the newest state
        if let Some(snapshot) = &latest {
            draw_frame(&mut canvas, snapshot);
        }

        next_frame().await;
        accumulator += get_frame_time();
    }
}
