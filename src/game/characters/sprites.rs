// Sprite sheet data for the playable bomber

use super::animation::{AnimationError, AnimationFrame, WalkAnimations};
use crate::engine::renderer::{FrameRect, TextureHandle};
use std::collections::HashMap;

/// Asset path of the bomber sprite sheet
pub const BOMBER_SHEET_PATH: &str = "images/bomberman.png";

/// A texture plus the named frame regions inside it
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    texture: TextureHandle,
    frames: HashMap<&'static str, FrameRect>,
}

impl SpriteSheet {
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            frames: HashMap::new(),
        }
    }

    /// Add a named frame region
    pub fn with_frame(mut self, key: &'static str, frame: FrameRect) -> Self {
        self.frames.insert(key, frame);
        self
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn frame(&self, key: &str) -> Option<&FrameRect> {
        self.frames.get(key)
    }

    /// Check that every frame an animation table refers to exists
    pub fn validate(&self, animations: &WalkAnimations) -> Result<(), AnimationError> {
        match animations.frames().find(|f| !self.frames.contains_key(f.key)) {
            Some(missing) => Err(AnimationError::UnknownFrame { key: missing.key }),
            None => Ok(()),
        }
    }

    /// The bomber sheet: 16x24 frames with the origin at the feet
    pub fn bomber() -> Self {
        let frame = |column: u32, row: u32| FrameRect::new(column * 17 + 8, row * 24 + 8, 16, 24, 8, 15);

        Self::new(TextureHandle::from_path(BOMBER_SHEET_PATH))
            .with_frame("idle-down", frame(0, 0))
            .with_frame("move-down-1", frame(1, 0))
            .with_frame("move-down-2", frame(2, 0))
            .with_frame("idle-side", frame(3, 0))
            .with_frame("move-side-1", frame(4, 0))
            .with_frame("move-side-2", frame(5, 0))
            .with_frame("idle-up", frame(6, 0))
            .with_frame("move-up-1", frame(7, 0))
            .with_frame("move-up-2", frame(8, 0))
    }
}

/// Display time of each walk frame, in frame units
const WALK_FRAME_DURATION: u32 = 8;

fn walk_cycle(idle: &'static str, step_1: &'static str, step_2: &'static str) -> Vec<AnimationFrame> {
    vec![
        AnimationFrame::new(idle, WALK_FRAME_DURATION),
        AnimationFrame::new(step_1, WALK_FRAME_DURATION),
        AnimationFrame::new(idle, WALK_FRAME_DURATION),
        AnimationFrame::new(step_2, WALK_FRAME_DURATION),
    ]
}

/// Walk cycles for the bomber; right reuses the side frames mirrored
pub fn bomber_walk_animations() -> Result<WalkAnimations, AnimationError> {
    let side = walk_cycle("idle-side", "move-side-1", "move-side-2");
    WalkAnimations::new(
        walk_cycle("idle-down", "move-down-1", "move-down-2"),
        side.clone(),
        side,
        walk_cycle("idle-up", "move-up-1", "move-up-2"),
    )
}
