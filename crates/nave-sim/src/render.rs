//! Frame rendering against an abstract drawing surface.
//!
//! `Canvas` is the only thing the game asks of a graphics backend: a
//! transform stack plus a handful of primitives. Everything is drawn in a
//! single foreground colour on a cleared background.

use glam::Vec2;

use nave_core::constants::*;
use nave_core::enums::GamePhase;
use nave_core::state::{AsteroidView, GameStateSnapshot, ShipView};

/// Horizontal anchoring for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A drawing surface with a push/pop transform stack.
///
/// Coordinates passed to the primitives are in the current local space;
/// `translate` and `rotate` compose onto the current transform.
pub trait Canvas {
    /// Fill the whole surface with the background colour.
    fn clear(&mut self);
    /// Save the current transform.
    fn push(&mut self);
    /// Restore the most recently saved transform.
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec2);
    /// Rotate by `angle` radians.
    fn rotate(&mut self, angle: f32);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2);
    /// Draw the closed outline through `points`.
    fn stroke_polygon(&mut self, points: &[Vec2]);
    /// Draw a round dot of diameter `weight`.
    fn point(&mut self, at: Vec2, weight: f32);
    /// Draw text with its baseline at `at.y`.
    fn text(&mut self, text: &str, at: Vec2, size: f32, align: TextAlign);
}

/// Ship hull, nose up, in ship-local coordinates.
pub const SHIP_HULL: [Vec2; 3] = [
    Vec2::new(0.0, -10.0),
    Vec2::new(-5.0, 10.0),
    Vec2::new(5.0, 10.0),
];

/// Life icon shown in the HUD.
pub const LIFE_ICON: [Vec2; 3] = [
    Vec2::new(0.0, -5.0),
    Vec2::new(-5.0, 5.0),
    Vec2::new(5.0, 5.0),
];

/// Draw one complete frame for the snapshot.
pub fn draw_frame(canvas: &mut impl Canvas, snapshot: &GameStateSnapshot) {
    match snapshot.phase {
        GamePhase::Playing => draw_playing(canvas, snapshot),
        GamePhase::GameOver => draw_game_over(canvas, snapshot),
    }
}

fn draw_playing(canvas: &mut impl Canvas, snapshot: &GameStateSnapshot) {
    canvas.clear();
    draw_hud(canvas, snapshot.score, snapshot.lives);

    if let Some(ship) = &snapshot.ship {
        draw_ship(canvas, ship);
    }
    for laser in &snapshot.lasers {
        canvas.point(laser.position.0, LASER_STROKE_WEIGHT);
    }
    for asteroid in &snapshot.asteroids {
        draw_asteroid(canvas, asteroid);
    }
}

/// Score line plus one ship glyph per remaining life.
pub fn draw_hud(canvas: &mut impl Canvas, score: u32, lives: u32) {
    canvas.text(
        &format!("Score: {score}"),
        Vec2::new(20.0, 30.0),
        HUD_TEXT_SIZE,
        TextAlign::Left,
    );

    for i in 0..lives {
        canvas.push();
        canvas.translate(Vec2::new(30.0 + i as f32 * LIFE_ICON_SPACING, 80.0));
        canvas.fill_triangle(LIFE_ICON[0], LIFE_ICON[1], LIFE_ICON[2]);
        canvas.pop();
    }
}

fn draw_ship(canvas: &mut impl Canvas, ship: &ShipView) {
    canvas.push();
    canvas.translate(ship.position.0);
    canvas.rotate(ship.heading);
    canvas.fill_triangle(SHIP_HULL[0], SHIP_HULL[1], SHIP_HULL[2]);
    canvas.pop();
}

fn draw_asteroid(canvas: &mut impl Canvas, asteroid: &AsteroidView) {
    canvas.push();
    canvas.translate(asteroid.position.0);
    canvas.stroke_polygon(&asteroid.outline);
    canvas.pop();
}

fn draw_game_over(canvas: &mut impl Canvas, snapshot: &GameStateSnapshot) {
    let center = Vec2::new(snapshot.canvas.width / 2.0, snapshot.canvas.height / 2.0);

    canvas.clear();
    canvas.text("GAME OVER", center, GAME_OVER_TEXT_SIZE, TextAlign::Center);
    canvas.text(
        &format!("Final Score: {}", snapshot.score),
        center + Vec2::new(0.0, 40.0),
        HUD_TEXT_SIZE,
        TextAlign::Center,
    );
    canvas.text(
        "Press ENTER to restart",
        center + Vec2::new(0.0, 80.0),
        HUD_TEXT_SIZE,
        TextAlign::Center,
    );
}
