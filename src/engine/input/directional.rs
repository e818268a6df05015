// Directional polling interface consumed by characters

/// Reports which walking keys a player is holding.
///
/// Characters only see this trait, so tests can drive them with a stub and
/// the game can back it with the keyboard.
pub trait DirectionalInput {
    fn is_down(&self, player_id: usize) -> bool;
    fn is_up(&self, player_id: usize) -> bool;
    fn is_left(&self, player_id: usize) -> bool;
    fn is_right(&self, player_id: usize) -> bool;
}

/// Fixed set of held keys for a single player, standing in for the keyboard
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub player_id: usize,
    pub down: bool,
    pub up: bool,
    pub left: bool,
    pub right: bool,
}

#[cfg(test)]
impl HeldKeys {
    /// No keys held
    pub fn none(player_id: usize) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    pub fn down(player_id: usize) -> Self {
        Self {
            down: true,
            ..Self::none(player_id)
        }
    }

    pub fn up(player_id: usize) -> Self {
        Self {
            up: true,
            ..Self::none(player_id)
        }
    }

    pub fn left(player_id: usize) -> Self {
        Self {
            left: true,
            ..Self::none(player_id)
        }
    }

    pub fn right(player_id: usize) -> Self {
        Self {
            right: true,
            ..Self::none(player_id)
        }
    }
}

#[cfg(test)]
impl DirectionalInput for HeldKeys {
    fn is_down(&self, player_id: usize) -> bool {
        self.player_id == player_id && self.down
    }

    fn is_up(&self, player_id: usize) -> bool {
        self.player_id == player_id && self.up
    }

    fn is_left(&self, player_id: usize) -> bool {
        self.player_id == player_id && self.left
    }

    fn is_right(&self, player_id: usize) -> bool {
        self.player_id == player_id && self.right
    }
}
