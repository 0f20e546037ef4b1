//! Errors raised at the platform boundary
//!
//! The simulation itself is infallible; everything here is fatal for the
//! process and reported once before exit.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while bringing up or running the window, GPU or assets
#[derive(Debug, Error)]
pub enum DasherError {
    /// Texture missing, unreadable or not a decodable image
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Settings file exists but could not be parsed
    #[error("invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// The GPU ran out of memory while presenting
    #[error("graphics device out of memory")]
    OutOfMemory,
}
