//! This module contains all the constants used in the game.

use glam::{UVec2, Vec2};

/// The size of the playfield, in cells.
pub const GRID_SIZE: UVec2 = UVec2::new(16, 16);

/// The size of each cell, in stage pixels.
pub const TILE_SIZE: f32 = 160.0;

/// Where the player appears when a session starts, in cells.
pub const PLAYER_START: Vec2 = Vec2::new(8.0, 8.0);

/// Player movement speed, in cells per millisecond (0.1 cells per 60 Hz frame).
pub const PLAYER_SPEED_PER_MS: f32 = 0.006;

/// Muli movement speed, in tile units per millisecond.
///
/// Multiplied by [`TILE_SIZE`] this gives 0.016 cells per millisecond.
pub const MULI_SPEED: f32 = 0.0001;

/// How many mulis roam the playfield at once.
pub const MULI_COUNT: usize = 3;

/// How long a muli idles before deciding what to do next, in milliseconds.
pub const IDLE_COOLDOWN_MS: f32 = 2000.0;

/// Chance that a motivated muli goes back to idling instead of moving.
pub const MOTIVATION_SKIP_CHANCE: f32 = 0.3;

/// Distance from the target cell, per axis, at which a moving muli snaps into place.
pub const ARRIVAL_EPSILON: f32 = 0.01;

/// How long a caught muli plays its death animation before respawning, in milliseconds.
pub const DYING_TIME_MS: f32 = 1000.0;

/// How long the player must idle before turning to face the camera, in milliseconds.
pub const STAND_IDLE_THRESHOLD_MS: f32 = 2000.0;

/// Width and height of the stage the sprites are composited on, in stage pixels.
pub const STAGE_SIZE: Vec2 = Vec2::new(5940.0, 3240.0);

/// Horizontal origin of the playfield on the stage, in stage pixels.
pub const STAGE_ORIGIN_X: f32 = 1620.0;

/// Offset applied to a cell coordinate before scaling to pixels, in cells.
pub const SPRITE_CELL_OFFSET: Vec2 = Vec2::new(0.4375, 1.5625);
