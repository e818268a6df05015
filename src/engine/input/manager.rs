// Input manager - Main coordination system for all input

use super::action::{Action, InputSource};
use super::config::InputConfigManager;
use super::directional::DirectionalInput;
use super::player::PlayerInput;
use log::debug;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Main input manager that coordinates all input for all players
pub struct InputManager {
    /// Key bindings for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Global actions (menu, debug toggle) pressed this frame
    global_pressed: Vec<Action>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(max_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(max_players),
            players: (0..max_players).map(PlayerInput::new).collect(),
            global_pressed: Vec::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Route a physical key to whichever player (or global binding) owns it
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let source = InputSource::key(key_code);

        for player in &mut self.players {
            let Some(action) = self
                .config
                .get_config(player.player_id())
                .and_then(|config| config.get_action(source))
            else {
                continue;
            };

            match state {
                ElementState::Pressed if !repeat => player.press(action),
                ElementState::Pressed => {}
                ElementState::Released => player.release(action),
            }
            return;
        }

        if let Some(action) = self.config.global_config().get_action(source) {
            if state == ElementState::Pressed && !repeat {
                debug!("Global action {:?}", action);
                self.global_pressed.push(action);
            }
        }
    }

    /// Drop this frame's global press events
    /// Call this once per frame after the simulation ran
    pub fn update(&mut self) {
        self.global_pressed.clear();
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Check if a global action was pressed this frame
    pub fn global_just_pressed(&self, action: Action) -> bool {
        self.global_pressed.contains(&action)
    }

    /// Forget every held key, for when key releases can no longer arrive
    /// (e.g. the window lost focus)
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        debug!("Input state reset");
        self.global_pressed.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(2) // Two local players share the keyboard
    }
}

impl DirectionalInput for InputManager {
    fn is_down(&self, player_id: usize) -> bool {
        self.player(player_id).is_some_and(|p| p.is_down(player_id))
    }

    fn is_up(&self, player_id: usize) -> bool {
        self.player(player_id).is_some_and(|p| p.is_up(player_id))
    }

    fn is_left(&self, player_id: usize) -> bool {
        self.player(player_id).is_some_and(|p| p.is_left(player_id))
    }

    fn is_right(&self, player_id: usize) -> bool {
        self.player(player_id).is_some_and(|p| p.is_right(player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::default();
        assert!(manager.player(0).is_some());
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
    }

    #[test]
    fn test_keys_route_to_owning_player() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::ArrowDown, ElementState::Pressed, false);
        manager.process_key(KeyCode::KeyA, ElementState::Pressed, false);

        assert!(manager.is_down(0));
        assert!(!manager.is_down(1));
        assert!(manager.is_left(1));
        assert!(!manager.is_left(0));
    }

    #[test]
    fn test_release_clears_direction() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::ArrowRight, ElementState::Pressed, false);
        manager.update();
        manager.process_key(KeyCode::ArrowRight, ElementState::Released, false);

        assert!(!manager.is_right(0));
    }

    #[test]
    fn test_repeat_does_not_create_press_event() {
        let mut manager = InputManager::new(1);
        manager.process_key(KeyCode::ArrowUp, ElementState::Pressed, false);
        manager.update();
        manager.process_key(KeyCode::ArrowUp, ElementState::Pressed, true);

        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));

        // A held global key fires once
        manager.process_key(KeyCode::F3, ElementState::Pressed, false);
        manager.update();
        manager.process_key(KeyCode::F3, ElementState::Pressed, true);
        assert!(!manager.global_just_pressed(Action::ToggleDebug));
    }

    #[test]
    fn test_global_actions() {
        let mut manager = InputManager::new(2);
        manager.process_key(KeyCode::F3, ElementState::Pressed, false);
        assert!(manager.global_just_pressed(Action::ToggleDebug));

        manager.update();
        assert!(!manager.global_just_pressed(Action::ToggleDebug));
    }

    #[test]
    fn test_unknown_player_reports_nothing() {
        let manager = InputManager::new(1);
        assert!(!manager.is_down(5));
        assert!(!manager.is_right(5));
    }

    #[test]
    fn test_reset_all_releases_held_keys() {
        let mut manager = InputManager::new(2);
        for key in [KeyCode::ArrowDown, KeyCode::ArrowLeft, KeyCode::KeyW, KeyCode::KeyD] {
            manager.process_key(key, ElementState::Pressed, false);
        }
        manager.process_key(KeyCode::Escape, ElementState::Pressed, false);
        manager.update();

        manager.reset_all();

        for player_id in 0..2 {
            assert!(!manager.is_down(player_id));
            assert!(!manager.is_up(player_id));
            assert!(!manager.is_left(player_id));
            assert!(!manager.is_right(player_id));
        }
        assert!(!manager.global_just_pressed(Action::Menu));

        // Keys pressed again after focus returns register normally
        manager.process_key(KeyCode::ArrowDown, ElementState::Pressed, false);
        assert!(manager.is_down(0));
    }
}
