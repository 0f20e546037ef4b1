//! Texture decoding

use std::path::Path;

use glam::Vec2;

use crate::error::DasherError;

/// Nebula obstacle sprite sheet (8x8 frames)
pub const NEBULA_TEXTURE: &str = "12_nebula_spritesheet.png";
/// Player sprite sheet (one row of 6 frames)
pub const SCARFY_TEXTURE: &str = "scarfy.png";
/// Parallax layers, furthest first
pub const BACKGROUND_TEXTURE: &str = "far-buildings.png";
pub const MIDGROUND_TEXTURE: &str = "back-buildings.png";
pub const FOREGROUND_TEXTURE: &str = "foreground.png";

/// Decoded RGBA8 pixels ready for upload
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Read and decode an image file
    pub fn load(path: &Path) -> Result<Self, DasherError> {
        let image = image::open(path).map_err(|source| DasherError::Texture {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    /// Texture dimensions in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
