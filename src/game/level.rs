// Static level collision data

use crate::core::math::floor_div;
use crate::game::constants::{HALF_TILE_SIZE, TILE_SIZE};
use glam::{IVec2, Vec2};
use std::fmt;
use std::ops::Index;

/// Errors raised while building level data
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Collision map has no tiles")]
    Empty,

    #[error("Row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown tile glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },

    #[error("Spawn tile ({x}, {y}) is outside the map")]
    SpawnOutOfBounds { x: i32, y: i32 },

    #[error("Spawn tile ({x}, {y}) is blocked by {tile:?}")]
    SpawnBlocked { x: i32, y: i32, tile: CollisionTile },
}

/// Collision class of a tile. Ordinals at or above `Wall` block movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CollisionTile {
    Empty = 0,
    Flower = 1,
    Wall = 16,
    Block = 17,
}

impl CollisionTile {
    pub fn is_blocking(self) -> bool {
        self >= CollisionTile::Wall
    }

    /// Parse a map glyph: `.` empty, `,` flower, `#` wall, `B` block
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Empty),
            ',' => Some(Self::Flower),
            '#' => Some(Self::Wall),
            'B' => Some(Self::Block),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Flower => ',',
            Self::Wall => '#',
            Self::Block => 'B',
        }
    }
}

/// Grid cell index; rows grow downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub row: i32,
    pub column: i32,
}

impl TileCoord {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Cell containing a pixel position
    pub fn from_pixel(x: f32, y: f32) -> Self {
        Self {
            row: floor_div(y, TILE_SIZE),
            column: floor_div(x, TILE_SIZE),
        }
    }

    /// Pixel position of the cell centre
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.column as f32 * TILE_SIZE + HALF_TILE_SIZE,
            self.row as f32 * TILE_SIZE + HALF_TILE_SIZE,
        )
    }
}

impl From<IVec2> for TileCoord {
    /// `x` is the column, `y` the row
    fn from(tile: IVec2) -> Self {
        Self::new(tile.y, tile.x)
    }
}

/// Read-only grid of collision tiles, indexed `[row][column]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMap {
    columns: usize,
    tiles: Vec<CollisionTile>,
}

impl CollisionMap {
    /// Build a map from rows of tiles; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<CollisionTile>>) -> Result<Self, LevelError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(columns * rows.len());
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != columns {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: columns,
                    actual: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Ok(Self { columns, tiles })
    }

    /// Parse a map drawn with glyphs, one line per row
    pub fn parse(layout: &str) -> Result<Self, LevelError> {
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, glyph)| {
                        CollisionTile::from_glyph(glyph).ok_or(LevelError::UnknownGlyph {
                            glyph,
                            row,
                            column,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.tiles.len() / self.columns
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Map size in pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * TILE_SIZE,
            self.rows() as f32 * TILE_SIZE,
        )
    }

    fn offset(&self, coord: TileCoord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let column = usize::try_from(coord.column).ok()?;
        (row < self.rows() && column < self.columns).then(|| row * self.columns + column)
    }

    /// Tile at `coord`, or `None` outside the map
    pub fn get(&self, coord: TileCoord) -> Option<CollisionTile> {
        self.offset(coord).map(|i| self.tiles[i])
    }

    pub fn is_blocking(&self, coord: TileCoord) -> bool {
        self[coord].is_blocking()
    }

    /// Check that a character can spawn on `tile` (`x` column, `y` row)
    pub fn validate_spawn(&self, tile: IVec2) -> Result<(), LevelError> {
        match self.get(tile.into()) {
            None => Err(LevelError::SpawnOutOfBounds {
                x: tile.x,
                y: tile.y,
            }),
            Some(found) if found.is_blocking() => Err(LevelError::SpawnBlocked {
                x: tile.x,
                y: tile.y,
                tile: found,
            }),
            Some(_) => Ok(()),
        }
    }
}

impl Index<TileCoord> for CollisionMap {
    type Output = CollisionTile;

    /// Panics outside the map: levels must enclose every reachable cell
    fn index(&self, coord: TileCoord) -> &CollisionTile {
        match self.offset(coord) {
            Some(i) => &self.tiles[i],
            None => panic!(
                "tile ({}, {}) outside {}x{} collision map",
                coord.row,
                coord.column,
                self.rows(),
                self.columns
            ),
        }
    }
}

impl fmt::Display for CollisionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.columns) {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Layout of the first battle stage
pub const STAGE_LAYOUT: &str = "
    ###############
    #...BB.B.BB...#
    #.#B#.#B#.#B#.#
    #.BB,B...B,BB.#
    #B#.#B#.#B#.#B#
    #.B..B,.,B..B.#
    #B#B#.#.#.#B#B#
    #.B..B,.,B..B.#
    #B#.#B#.#B#.#B#
    #.BB,B...B,BB.#
    #.#B#.#B#.#B#.#
    #...BB.B.BB...#
    ###############
";

/// Collision map of the first battle stage
pub fn stage_collision_map() -> Result<CollisionMap, LevelError> {
    CollisionMap::parse(STAGE_LAYOUT)
}
