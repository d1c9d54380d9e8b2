//! Gameplay constants and tuning parameters.
//!
//! Distances are in canvas units (pixels), velocities in units per frame.

/// Nominal frame rate the per-frame tuning values assume.
pub const FRAME_RATE: u32 = 60;

// --- Canvas ---

/// Default canvas width.
pub const CANVAS_WIDTH: f32 = 800.0;

/// Default canvas height.
pub const CANVAS_HEIGHT: f32 = 600.0;

// --- Ship ---

/// Implicit collision radius of the ship.
pub const SHIP_COLLISION_RADIUS: f32 = 10.0;

/// Thrust added to the ship velocity per boosting frame.
pub const SHIP_THRUST: f32 = 0.1;

/// Velocity multiplier applied every frame (exponential decay).
pub const SHIP_DAMPING: f32 = 0.99;

/// Rotation rate applied while a turn key is held (radians per frame).
pub const SHIP_ROTATION_RATE: f32 = 0.1;

// --- Laser ---

/// Laser speed (units per frame).
pub const LASER_SPEED: f32 = 10.0;

/// Stroke weight used to draw a laser point.
pub const LASER_STROKE_WEIGHT: f32 = 4.0;

// --- Asteroids ---

/// Lower bound for a freshly spawned asteroid radius (inclusive).
pub const ASTEROID_MIN_RADIUS: f32 = 30.0;

/// Upper bound for a freshly spawned asteroid radius (exclusive).
pub const ASTEROID_MAX_RADIUS: f32 = 50.0;

/// Asteroids at or below this radius are destroyed without fragments.
pub const ASTEROID_SPLIT_THRESHOLD: f32 = 15.0;

/// Number of fragments produced by a split.
pub const ASTEROID_FRAGMENT_COUNT: usize = 2;

/// Lower bound for asteroid drift speed (inclusive).
pub const ASTEROID_MIN_SPEED: f32 = 1.0;

/// Upper bound for asteroid drift speed (exclusive).
pub const ASTEROID_MAX_SPEED: f32 = 2.0;

/// Minimum outline vertex count (inclusive).
pub const ASTEROID_MIN_VERTICES: usize = 7;

/// Maximum outline vertex count (exclusive).
pub const ASTEROID_MAX_VERTICES: usize = 12;

/// Per-vertex radius jitter, applied as a uniform offset in [-J, J).
pub const ASTEROID_VERTEX_JITTER: f32 = 5.0;

// --- Rounds ---

/// Lives at the start of a round.
pub const STARTING_LIVES: u32 = 3;

/// Asteroids spawned at the start of a round.
pub const INITIAL_ASTEROID_COUNT: usize = 5;

/// Initial asteroids are never placed closer than this to the ship spawn.
pub const SPAWN_SAFE_DISTANCE: f32 = 100.0;

/// Kill score is floor(SCORE_NUMERATOR / radius).
pub const SCORE_NUMERATOR: f32 = 1000.0;

// --- HUD ---

/// Text size for HUD and secondary game-over lines.
pub const HUD_TEXT_SIZE: f32 = 20.0;

/// Text size for the GAME OVER banner.
pub const GAME_OVER_TEXT_SIZE: f32 = 40.0;

/// Horizontal spacing between life icons.
pub const LIFE_ICON_SPACING: f32 = 25.0;
