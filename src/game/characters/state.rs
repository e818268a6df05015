// Character state machine states

/// Represents the current state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing still; holds the current animation frame
    #[default]
    Idle,
    /// Walking; the walk cycle plays
    Moving,
}

impl CharacterState {
    /// Whether the walk cycle advances in this state
    pub fn animates(&self) -> bool {
        matches!(self, Self::Moving)
    }

    /// Frame shown right after entering this state
    pub fn entry_frame(&self) -> usize {
        match self {
            Self::Idle => 0,
            // Skip the resting pose and start mid-stride
            Self::Moving => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(CharacterState::default(), CharacterState::Idle);
    }

    #[test]
    fn test_only_moving_animates() {
        assert!(!CharacterState::Idle.animates());
        assert!(CharacterState::Moving.animates());
    }

    #[test]
    fn test_entry_frames() {
        assert_eq!(CharacterState::Idle.entry_frame(), 0);
        assert_eq!(CharacterState::Moving.entry_frame(), 1);
    }
}
