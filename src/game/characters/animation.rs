// Character animation system

use super::direction::Direction;
use crate::engine::game_loop::FrameTime;
use crate::game::constants::FRAME_TIME;

/// Walking animations start on their second frame, so they need two
pub const MIN_WALK_FRAMES: usize = 2;

/// Errors raised while validating animation data
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Walk animation for {direction:?} has {frames} frames, need at least {}", MIN_WALK_FRAMES)]
    TooShort { direction: Direction, frames: usize },

    #[error("Frame {index} of the {direction:?} animation has zero duration")]
    ZeroDuration { direction: Direction, index: usize },

    #[error("Frame key {key:?} is not in the sprite sheet")]
    UnknownFrame { key: &'static str },
}

/// One step of an animation: which sprite frame to show and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Key into the sprite sheet
    pub key: &'static str,
    /// Display time in frame units (see [`FRAME_TIME`])
    pub duration: u32,
}

impl AnimationFrame {
    pub const fn new(key: &'static str, duration: u32) -> Self {
        Self { key, duration }
    }

    /// Display time in milliseconds
    pub fn duration_ms(&self) -> f64 {
        f64::from(self.duration) * FRAME_TIME
    }
}

/// Walk cycle for each facing direction
#[derive(Debug, Clone)]
pub struct WalkAnimations {
    by_direction: [Vec<AnimationFrame>; 4],
}

impl WalkAnimations {
    /// Build the table, rejecting cycles a character could not play
    pub fn new(
        down: Vec<AnimationFrame>,
        left: Vec<AnimationFrame>,
        right: Vec<AnimationFrame>,
        up: Vec<AnimationFrame>,
    ) -> Result<Self, AnimationError> {
        let mut by_direction: [Vec<AnimationFrame>; 4] = Default::default();
        for (direction, frames) in Direction::ALL.into_iter().zip([down, left, right, up]) {
            if frames.len() < MIN_WALK_FRAMES {
                return Err(AnimationError::TooShort {
                    direction,
                    frames: frames.len(),
                });
            }
            if let Some(index) = frames.iter().position(|f| f.duration == 0) {
                return Err(AnimationError::ZeroDuration { direction, index });
            }
            by_direction[direction.index()] = frames;
        }

        Ok(Self { by_direction })
    }

    /// Animation played while facing `direction`
    pub fn get(&self, direction: Direction) -> &[AnimationFrame] {
        &self.by_direction[direction.index()]
    }

    /// Every frame of every direction
    pub fn frames(&self) -> impl Iterator<Item = &AnimationFrame> {
        self.by_direction.iter().flatten()
    }
}

/// Playback position within the current animation
///
/// Holds only the frame index and when the next frame is due; the animation
/// itself is passed in, since it changes with the character's facing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPlayer {
    frame: usize,
    /// Simulation time (ms) at which the next frame is due
    timer: f64,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            frame: 0,
            timer: 0.0,
        }
    }

    /// Current frame index
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// When the next frame is due
    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Rewind to the first frame and schedule the next swap from its duration
    pub fn restart(&mut self, animation: &[AnimationFrame], time: &FrameTime) {
        self.frame = 0;
        self.timer = time.previous + animation[0].duration_ms();
    }

    /// Jump to `frame` without touching the timer, wrapping past the end
    pub fn set_frame(&mut self, frame: usize, animation: &[AnimationFrame]) {
        self.frame = if frame < animation.len() { frame } else { 0 };
    }

    /// Keep the index valid after switching to another animation
    pub fn fit_to(&mut self, animation: &[AnimationFrame]) {
        if self.frame >= animation.len() {
            self.frame = 0;
        }
    }

    /// Move to the next frame once its time has come.
    /// Returns whether the frame changed.
    pub fn update(&mut self, animation: &[AnimationFrame], time: &FrameTime) -> bool {
        if time.previous < self.timer {
            return false;
        }

        self.frame += 1;
        if self.frame >= animation.len() {
            self.frame = 0;
        }
        self.timer = time.previous + animation[self.frame].duration_ms();
        true
    }

    /// The frame currently shown
    pub fn current<'a>(&self, animation: &'a [AnimationFrame]) -> &'a AnimationFrame {
        &animation[self.frame]
    }
}
