// Rendering interfaces
//
// Game code draws through the `Canvas` trait with a `Camera` offset; the
// binary plugs in a concrete canvas.

mod camera;
mod canvas;
mod debug;
pub mod texture;

pub use camera::Camera;
pub use canvas::{Canvas, Color, Flip, FrameRect, LogCanvas, Rect};
pub use debug::DebugOverlay;
pub use texture::TextureHandle;
