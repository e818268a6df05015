// Character movement stats

use crate::game::constants::WALK_SPEED;

/// Speed tuning for a character; fixed for the character's lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    /// Base walking speed (pixels/second)
    pub base_speed: f32,
    /// Multiplier applied on top of the base speed
    pub speed_multiplier: f32,
}

/// Stats every bomber starts a round with
pub const BASE_STATS: CharacterStats = CharacterStats {
    base_speed: WALK_SPEED,
    speed_multiplier: 1.2,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Effective speed in pixels per second
    pub fn speed(&self) -> f32 {
        self.base_speed * self.speed_multiplier
    }
}
