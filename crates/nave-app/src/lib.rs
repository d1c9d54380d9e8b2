//! NAVE desktop application.
//!
//! Wires the headless engine from `nave-sim` to a macroquad window:
//! configuration, keyboard polling, drawing and the frame driver.

pub mod canvas;
pub mod config;
pub mod game_loop;
pub mod input;

pub use nave_core as core;
