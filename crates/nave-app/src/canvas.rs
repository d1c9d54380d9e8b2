//! `Canvas` implementation on top of macroquad's immediate-mode drawing.
//!
//! macroquad has no transform stack of its own for 2D shapes, so the canvas
//! keeps one (`Affine2`) and issues every primitive in screen coordinates.

use glam::{Affine2, Vec2};
use macroquad::color::{Color, BLACK, WHITE};
use macroquad::{math, shapes, text, window};

use nave_sim::render::{Canvas, TextAlign};

const BACKGROUND: Color = BLACK;
const FOREGROUND: Color = WHITE;
const OUTLINE_THICKNESS: f32 = 1.0;

fn to_screen(point: Vec2) -> math::Vec2 {
    math::vec2(point.x, point.y)
}

/// Draws onto the current macroquad window.
#[derive(Debug, Clone)]
pub struct MacroquadCanvas {
    current: Affine2,
    saved: Vec<Affine2>,
}

impl MacroquadCanvas {
    pub fn new() -> Self {
        Self {
            current: Affine2::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Map a local point through the current transform.
    pub fn project(&self, point: Vec2) -> Vec2 {
        self.current.transform_point2(point)
    }

    /// Drop any transforms left over from the previous frame.
    fn reset(&mut self) {
        self.current = Affine2::IDENTITY;
        self.saved.clear();
    }
}

impl Default for MacroquadCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self) {
        self.reset();
        window::clear_background(BACKGROUND);
    }

    fn push(&mut self) {
        self.saved.push(self.current);
    }

    fn pop(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        } else {
            log::warn!("canvas pop without matching push");
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.current = self.current * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, angle: f32) {
        self.current = self.current * Affine2::from_angle(angle);
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        shapes::draw_triangle(
            to_screen(self.project(a)),
            to_screen(self.project(b)),
            to_screen(self.project(c)),
            FOREGROUND,
        );
    }

    fn stroke_polygon(&mut self, points: &[Vec2]) {
        let projected: Vec<Vec2> = points.iter().map(|&p| self.project(p)).collect();
        for (i, from) in projected.iter().enumerate() {
            let to = projected[(i + 1) % projected.len()];
            shapes::draw_line(from.x, from.y, to.x, to.y, OUTLINE_THICKNESS, FOREGROUND);
        }
    }

    fn point(&mut self, at: Vec2, weight: f32) {
        let at = self.project(at);
        shapes::draw_circle(at.x, at.y, weight / 2.0, FOREGROUND);
    }

    fn text(&mut self, text: &str, at: Vec2, size: f32, align: TextAlign) {
        let at = self.project(at);
        let x = match align {
            TextAlign::Left => at.x,
            TextAlign::Center => at.x - text::measure_text(text, None, size as u16, 1.0).width / 2.0,
        };
        text::draw_text(text, x, at.y, size, FOREGROUND);
    }
}
