// Camera offset for 2D pixel rendering

use glam::Vec2;

/// 2D camera; `position` is the world pixel drawn at the top-left of the view
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec2,
    /// Viewport size in pixels
    viewport: Vec2,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    /// Resize the viewport (in world pixels)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Center the view on `target`, clamped so it never leaves a world of
    /// `world_size` pixels. Worlds smaller than the viewport stay at the origin.
    pub fn follow(&mut self, target: Vec2, world_size: Vec2) {
        let max = (world_size - self.viewport).max(Vec2::ZERO);
        self.position = (target - self.viewport / 2.0).clamp(Vec2::ZERO, max);
    }

    /// Convert world coordinates to view coordinates
    pub fn world_to_view(&self, world_pos: Vec2) -> Vec2 {
        world_pos - self.position
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 256.0, 224.0)
    }
}
