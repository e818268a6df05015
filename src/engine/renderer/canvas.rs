// Drawing interface used by entities
//
// The actual blitting backend lives outside the game logic; entities only
// describe what to draw through the `Canvas` trait.

use super::camera::Camera;
use super::texture::TextureHandle;
use glam::Vec2;

/// A sprite region inside a texture, drawn relative to its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    /// Top-left of the region in the texture (pixels)
    pub x: u32,
    pub y: u32,
    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,
    /// Point inside the region placed at the draw position
    pub origin_x: i32,
    pub origin_y: i32,
}

impl FrameRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32, origin_x: i32, origin_y: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            origin_x,
            origin_y,
        }
    }
}

/// Horizontal/vertical scale applied when blitting (`-1` mirrors)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip(pub i8, pub i8);

impl Flip {
    pub const NONE: Self = Self(1, 1);
    pub const HORIZONTAL: Self = Self(-1, 1);
}

/// Axis-aligned rectangle in world space: `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Self = Self(0xFF, 0xFF, 0xFF, 0xFF);
    pub const YELLOW: Self = Self(0xFF, 0xFF, 0x00, 0xFF);
}

/// Drawing collaborator
pub trait Canvas {
    /// Blit `frame` from `texture` with its origin at view pixel `(x, y)`
    fn draw_frame_origin(&mut self, texture: TextureHandle, frame: &FrameRect, x: i32, y: i32, flip: Flip);

    /// Outline a world-space rectangle
    fn draw_box(&mut self, camera: &Camera, rect: Rect, color: Color);

    /// Small crosshair centred on a world-space point
    fn draw_cross(&mut self, camera: &Camera, point: Vec2, color: Color);
}

/// Canvas that traces every draw call through the logger
///
/// Stands in for a real backend in the headless build.
#[derive(Debug, Default)]
pub struct LogCanvas {
    draw_calls: u64,
}

impl LogCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of draw calls issued so far
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl Canvas for LogCanvas {
    fn draw_frame_origin(&mut self, texture: TextureHandle, frame: &FrameRect, x: i32, y: i32, flip: Flip) {
        self.draw_calls += 1;
        log::trace!(
            "blit {:?} region ({}, {}) {}x{} at ({}, {}) flip {:?}",
            texture,
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            x,
            y,
            flip
        );
    }

    fn draw_box(&mut self, camera: &Camera, rect: Rect, color: Color) {
        self.draw_calls += 1;
        let top_left = camera.world_to_view(Vec2::new(rect.x, rect.y));
        log::trace!(
            "box at {:?} {}x{} color {:?}",
            top_left,
            rect.width,
            rect.height,
            color
        );
    }

    fn draw_cross(&mut self, camera: &Camera, point: Vec2, color: Color) {
        self.draw_calls += 1;
        log::trace!("cross at {:?} color {:?}", camera.world_to_view(point), color);
    }
}
