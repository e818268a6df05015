// Key binding configuration and remapping

use super::action::{self, Action, InputSource};
use std::collections::HashMap;

/// Player id used for the bindings shared by every player
pub const GLOBAL_PLAYER: usize = usize::MAX;

/// Key bindings for a single player
#[derive(Debug, Clone)]
pub struct InputConfig {
    player_id: usize,
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
        }
    }

    /// Default bindings for a local player slot
    pub fn for_player(player_id: usize) -> Self {
        let mut config = Self::new(player_id);
        config.reset_to_defaults();
        config
    }

    /// Bind a source to an action, replacing whatever the source did before
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Reset to default bindings for this player
    pub fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        let defaults = match self.player_id {
            0 => action::default_p1_bindings(),
            1 => action::default_p2_bindings(),
            GLOBAL_PLAYER => action::global_bindings(),
            _ => Vec::new(),
        };
        for (source, action) in defaults {
            self.bind(source, action);
        }
    }
}

/// Bindings for every local player plus the global ones
#[derive(Debug)]
pub struct InputConfigManager {
    configs: Vec<InputConfig>,
    global_config: InputConfig,
}

impl InputConfigManager {
    pub fn new(max_players: usize) -> Self {
        Self {
            configs: (0..max_players).map(InputConfig::for_player).collect(),
            global_config: InputConfig::for_player(GLOBAL_PLAYER),
        }
    }

    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    pub fn global_config(&self) -> &InputConfig {
        &self.global_config
    }
}
