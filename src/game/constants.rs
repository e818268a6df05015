// Shared game constants

/// Edge length of one level tile in pixels
pub const TILE_SIZE: f32 = 16.0;

pub const HALF_TILE_SIZE: f32 = TILE_SIZE / 2.0;

/// Length of one animation frame unit in milliseconds
pub const FRAME_TIME: f64 = 1000.0 / 60.0;

/// Base walking speed in pixels per second
pub const WALK_SPEED: f32 = 45.0;
