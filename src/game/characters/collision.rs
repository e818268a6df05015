// Tile collision probing
//
// A character is one tile wide, centred on its position. Before moving it
// samples two points just past its leading edge, one near each side, and
// looks up which cells they land in.

use super::direction::Direction;
use crate::game::constants::HALF_TILE_SIZE;
use crate::game::level::{CollisionMap, TileCoord};
use glam::Vec2;

/// Leading edge for Down/Right, and the offset towards the negative side
const EDGE_NEAR: f32 = HALF_TILE_SIZE;
/// Leading edge for Up/Left; one pixel further so it lands in the next cell
const EDGE_FAR: f32 = HALF_TILE_SIZE + 1.0;
/// Offset towards the positive side, kept inside the character's own cell
const EDGE_SIDE: f32 = HALF_TILE_SIZE - 1.0;

/// The two cells probed when moving in a direction
pub type ProbeCoords = [TileCoord; 2];

/// Cells the leading edge would enter when moving from `position`.
///
/// Probe 0 is on the left (Down/Up) or top (Left/Right) side, probe 1 on the
/// opposite side, matching the order of [`Direction::counter_directions`].
pub fn probe_coords(position: Vec2, direction: Direction) -> ProbeCoords {
    let Vec2 { x, y } = position;
    match direction {
        Direction::Down => [
            TileCoord::from_pixel(x - EDGE_NEAR, y + EDGE_NEAR),
            TileCoord::from_pixel(x + EDGE_SIDE, y + EDGE_NEAR),
        ],
        Direction::Right => [
            TileCoord::from_pixel(x + EDGE_NEAR, y - EDGE_NEAR),
            TileCoord::from_pixel(x + EDGE_NEAR, y + EDGE_SIDE),
        ],
        Direction::Up => [
            TileCoord::from_pixel(x - EDGE_NEAR, y - EDGE_FAR),
            TileCoord::from_pixel(x + EDGE_SIDE, y - EDGE_FAR),
        ],
        Direction::Left => [
            TileCoord::from_pixel(x - EDGE_FAR, y - EDGE_NEAR),
            TileCoord::from_pixel(x - EDGE_FAR, y + EDGE_SIDE),
        ],
    }
}

/// Whether the probes describe a head-on wall rather than a grazed corner.
///
/// Blocks when both probes hit the same blocking cell, or both hit blocking
/// cells. A single blocked probe is left to the wall-slide logic.
pub fn should_block_movement(map: &CollisionMap, coords: &ProbeCoords) -> bool {
    let [first, second] = *coords;
    let first_blocking = map.is_blocking(first);

    (first == second && first_blocking) || (first_blocking && map.is_blocking(second))
}
