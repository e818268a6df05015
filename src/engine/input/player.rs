// Per-player input state management

use super::action::Action;
use super::directional::DirectionalInput;
use std::collections::HashSet;

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    /// Player ID (0 or 1 for the local players)
    player_id: usize,

    /// Actions currently held
    pressed: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        self.pressed.insert(action);
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Release everything (e.g. when the window loses focus)
    pub(crate) fn reset(&mut self) {
        self.pressed.clear();
    }
}

impl DirectionalInput for PlayerInput {
    fn is_down(&self, player_id: usize) -> bool {
        player_id == self.player_id && self.is_pressed(Action::MoveDown)
    }

    fn is_up(&self, player_id: usize) -> bool {
        player_id == self.player_id && self.is_pressed(Action::MoveUp)
    }

    fn is_left(&self, player_id: usize) -> bool {
        player_id == self.player_id && self.is_pressed(Action::MoveLeft)
    }

    fn is_right(&self, player_id: usize) -> bool {
        player_id == self.player_id && self.is_pressed(Action::MoveRight)
    }
}
