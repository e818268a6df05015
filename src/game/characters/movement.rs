// Input-driven movement with wall sliding

use super::collision::{probe_coords, should_block_movement};
use super::direction::Direction;
use crate::core::math::is_zero;
use crate::engine::input::DirectionalInput;
use crate::game::level::CollisionMap;
use glam::Vec2;
use log::trace;

/// Facing and unit velocity chosen for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub direction: Direction,
    pub velocity: Vec2,
}

impl Movement {
    /// Keep facing `direction` without moving
    pub fn stop(direction: Direction) -> Self {
        Self {
            direction,
            velocity: Vec2::ZERO,
        }
    }

    /// Walk in `direction` at unit speed
    pub fn walk(direction: Direction) -> Self {
        Self {
            direction,
            velocity: direction.movement(),
        }
    }

    pub fn is_stopped(&self) -> bool {
        is_zero(self.velocity)
    }
}

/// Decides where a character goes this tick.
///
/// Borrows everything it needs, so resolving never mutates the character.
#[derive(Debug, Clone, Copy)]
pub struct MovementResolver<'a> {
    map: &'a CollisionMap,
    position: Vec2,
    facing: Direction,
}

impl<'a> MovementResolver<'a> {
    pub fn new(map: &'a CollisionMap, position: Vec2, facing: Direction) -> Self {
        Self {
            map,
            position,
            facing,
        }
    }

    /// Poll the held keys in priority order Down > Right > Up > Left.
    /// With nothing held the character keeps its facing and stands still.
    pub fn resolve(&self, input: &dyn DirectionalInput, player_id: usize) -> Movement {
        let requested = if input.is_down(player_id) {
            Some(Direction::Down)
        } else if input.is_right(player_id) {
            Some(Direction::Right)
        } else if input.is_up(player_id) {
            Some(Direction::Up)
        } else if input.is_left(player_id) {
            Some(Direction::Left)
        } else {
            None
        };

        match requested {
            Some(direction) => self.perform_wall_check(direction),
            None => Movement::stop(self.facing),
        }
    }

    /// Check the cells ahead and pick the move for `direction`.
    ///
    /// A head-on wall stops the character in its current facing. When only
    /// one probe is blocked the character slides sideways around the corner,
    /// away from the blocked probe.
    pub fn perform_wall_check(&self, direction: Direction) -> Movement {
        let coords = probe_coords(self.position, direction);

        if should_block_movement(self.map, &coords) {
            return Movement::stop(self.facing);
        }

        let counter = direction.counter_directions();
        for (probe, slide) in coords.iter().zip(counter) {
            if self.map.is_blocking(*probe) {
                trace!("{:?} blocked at {:?}, sliding {:?}", direction, probe, slide);
                return Movement::walk(slide);
            }
        }

        Movement::walk(direction)
    }
}
