//! Rendering module
//!
//! The scene is composed against the [`Canvas`] trait; [`RenderState`] is the
//! wgpu implementation that batches textured quads per texture.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod texture;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{SceneTextures, draw_scene};
pub use texture::TextureData;
pub use vertex::{Color, colors};

use glam::Vec2;

use crate::sim::Rect;

/// Handle to a texture owned by a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Immediate-mode 2D drawing in logical screen pixels
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);

    /// Draw the `source` region of a texture with its top-left at `position`
    fn draw_texture_region(&mut self, texture: TextureId, source: Rect, position: Vec2, tint: Color);

    /// Draw a whole texture scaled uniformly
    fn draw_texture_scaled(&mut self, texture: TextureId, position: Vec2, scale: f32, tint: Color);

    /// Draw text with its top-left at (`x`, `y`); `size` is the line height
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);

    /// Width of `text` as [`Canvas::draw_text`] would draw it
    fn measure_text(&self, text: &str, size: i32) -> i32 {
        font::measure_text(text, size)
    }
}
