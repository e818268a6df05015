// Input handling system
//
// Keyboard input for the local players sharing one keyboard, plus the
// directional polling interface characters read every tick.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Key binding configuration and remapping
// - `directional`: The `DirectionalInput` trait characters consume
// - `player`: Per-player held-key state
// - `manager`: Routes winit key events to players and global actions
//
// ## Usage Example
//
// ```rust
// use engine::input::{DirectionalInput, InputManager};
//
// let mut input_manager = InputManager::new(2);
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Characters poll it during their update
// if input_manager.is_down(0) {
//     // Player 0 is holding down
// }
//
// // At the end of each frame, clear per-frame press events
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod directional;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use directional::DirectionalInput;
pub use manager::InputManager;

#[cfg(test)]
pub use directional::HeldKeys;
