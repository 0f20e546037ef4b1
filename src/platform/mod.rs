//! Platform layer
//!
//! Everything that touches the OS lives here:
//! - Keyboard state with per-frame press edges
//! - Frame pacing and delta time
//! - The winit window and event loop driving the game

pub mod input;
pub mod native;
pub mod time;
