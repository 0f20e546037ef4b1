//! Dapper Dasher - A parallax side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Pure per-frame simulation (animation, physics, obstacles, collisions, session)
//! - `renderer`: Scene composition and the wgpu sprite renderer
//! - `platform`: Window, input and frame clock (winit)
//! - `settings`: Runtime preferences (asset location, window scale, vsync)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::DasherError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window title
    pub const WINDOW_TITLE: &str = "Dapper Dasher";
    /// Logical window dimensions (pixels)
    pub const WINDOW_WIDTH: u32 = 512;
    pub const WINDOW_HEIGHT: u32 = 380;
    /// Frame rate cap
    pub const TARGET_FPS: u32 = 60;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1250.0;
    /// Instantaneous jump impulse (pixels/s, negative is up)
    pub const JUMP_VELOCITY: f32 = -700.0;

    /// Number of nebula obstacles on the field
    pub const NEBULA_COUNT: usize = 3;
    /// Horizontal nebula velocity (pixels/s)
    pub const NEBULA_VELOCITY: f32 = -200.0;
    /// Horizontal spacing between nebulae in the initial layout
    pub const NEBULA_SPACING: f32 = 300.0;
    /// Nebula sprite sheet is an 8x8 grid of frames
    pub const NEBULA_SHEET_GRID: f32 = 8.0;
    /// Frames cycled by the nebula animation
    pub const NEBULA_MAX_FRAME: u32 = 7;
    pub const NEBULA_FRAME_DURATION: f32 = 1.0 / 16.0;
    /// Collision box inset on each side of a nebula frame
    pub const NEBULA_PADDING: f32 = 20.0;

    /// Scarfy sprite sheet is a single row of 6 frames
    pub const SCARFY_SHEET_FRAMES: f32 = 6.0;
    /// Frames cycled by the running animation
    pub const SCARFY_MAX_FRAME: u32 = 5;
    pub const SCARFY_FRAME_DURATION: f32 = 1.0 / 12.0;
    /// Collision box inset on each side of the player frame
    pub const SCARFY_PADDING: f32 = 30.0;

    /// Parallax scroll speeds (pixels/s), furthest layer slowest
    pub const BACKGROUND_SPEED: f32 = 20.0;
    pub const MIDGROUND_SPEED: f32 = 40.0;
    pub const FOREGROUND_SPEED: f32 = 80.0;
    /// Parallax layers are drawn at twice their native size
    pub const LAYER_SCALE: f32 = 2.0;
}
