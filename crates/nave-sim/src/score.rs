//! Score and lives bookkeeping for a round.
//!
//! Stored in `GameEngine`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

use nave_core::constants::SCORE_NUMERATOR;

/// Running totals for the current round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points earned this round. Never decreases within a round.
    pub score: u32,
    /// Remaining lives.
    pub lives: u32,
    pub asteroids_destroyed: u32,
    pub lasers_fired: u32,
}

impl ScoreState {
    /// Fresh totals for a new round.
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            ..Default::default()
        }
    }

    /// Credit a destroyed asteroid and return the points awarded.
    pub fn award_kill(&mut self, radius: f32) -> u32 {
        let points = points_for_radius(radius);
        self.score = self.score.saturating_add(points);
        self.asteroids_destroyed += 1;
        points
    }

    /// Take one life and return how many are left. Stops at zero.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

/// Points for destroying an asteroid of the given radius: floor(1000 / r).
/// Smaller rocks are worth more.
pub fn points_for_radius(radius: f32) -> u32 {
    (SCORE_NUMERATOR / radius).floor() as u32
}
