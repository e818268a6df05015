// Character system
//
// Everything a playable bomber needs:
// - Character entity and management
// - Facing directions and input-driven movement with wall sliding
// - Tile probes against the collision map
// - Idle/moving state and walk animations
// - Sprite sheet frames and speed stats

pub mod animation;
pub mod character;
pub mod collision;
pub mod direction;
pub mod movement;
pub mod sprites;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use character::{Character, CharacterManager, CharacterResources, Entity};
