// Cardinal facing directions

use glam::Vec2;

/// One of the four walking directions. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Down, Self::Left, Self::Right, Self::Up];

    /// Unit movement vector
    pub fn movement(self) -> Vec2 {
        match self {
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
        }
    }

    /// Perpendicular directions used to slide around corners.
    ///
    /// Index 0 answers a block under the first collision probe, index 1 a
    /// block under the second one.
    pub fn counter_directions(self) -> [Direction; 2] {
        match self {
            Self::Down | Self::Up => [Self::Right, Self::Left],
            Self::Left | Self::Right => [Self::Down, Self::Up],
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
