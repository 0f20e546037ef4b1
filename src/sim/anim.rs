//! Sprite-sheet animation
//!
//! A sprite shows one frame-sized region of its sheet. Advancing the animation
//! slides that region along the sheet once per frame duration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Animation state for one on-screen sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Visible region of the sprite sheet (x advances as frames cycle)
    pub rect: Rect,
    /// Top-left screen position
    pub pos: Vec2,
    /// Current frame index in `[0, max_frame)`
    pub frame: u32,
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
    /// Seconds accumulated since the last frame advance
    pub frame_elapsed: f32,
}

impl Sprite {
    pub fn new(rect: Rect, pos: Vec2, frame_duration: f32) -> Self {
        Self {
            rect,
            pos,
            frame: 0,
            frame_duration,
            frame_elapsed: 0.0,
        }
    }

    /// Screen-space box covered by the sprite
    pub fn bounds(&self) -> Rect {
        self.rect.at(self.pos)
    }

    /// Advance by one frame's elapsed time (see [`advance_animation`])
    pub fn animate(&mut self, dt: f32, max_frame: u32) {
        advance_animation(self, dt, max_frame);
    }
}

/// Advance `sprite` by `dt` seconds, cycling through `max_frame` frames.
///
/// At most one frame advance happens per call no matter how large `dt` is.
/// The source rect is positioned from the frame index *before* it increments,
/// so the visible column trails the index by one.
///
/// `max_frame` must be non-zero.
pub fn advance_animation(sprite: &mut Sprite, dt: f32, max_frame: u32) {
    debug_assert!(max_frame > 0);
    sprite.frame_elapsed += dt;
    if sprite.frame_elapsed >= sprite.frame_duration {
        sprite.frame_elapsed = 0.0;
        sprite.rect.x = sprite.frame as f32 * sprite.rect.width;
        sprite.frame = (sprite.frame + 1) % max_frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sprite(frame_duration: f32) -> Sprite {
        Sprite::new(
            Rect::new(0.0, 0.0, 128.0, 128.0),
            Vec2::new(192.0, 252.0),
            frame_duration,
        )
    }

    #[test]
    fn test_no_advance_before_duration() {
        let mut s = sprite(0.1);
        advance_animation(&mut s, 0.04, 5);
        assert_eq!(s.frame, 0);
        assert!((s.frame_elapsed - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_advance_moves_source_rect() {
        let mut s = sprite(0.1);
        s.frame = 3;
        advance_animation(&mut s, 0.1, 5);
        assert_eq!(s.frame, 4);
        // Rect tracks the index before the increment
        assert_eq!(s.rect.x, 3.0 * 128.0);
        assert_eq!(s.frame_elapsed, 0.0);
    }

    #[test]
    fn test_single_advance_for_large_dt() {
        let mut s = sprite(0.1);
        advance_animation(&mut s, 10.0, 5);
        assert_eq!(s.frame, 1);
        assert_eq!(s.frame_elapsed, 0.0);
    }

    #[test]
    fn test_wraps_to_zero() {
        let mut s = sprite(0.1);
        for _ in 0..5 {
            advance_animation(&mut s, 0.1, 5);
        }
        assert_eq!(s.frame, 0);
        assert_eq!(s.rect.x, 4.0 * 128.0);
    }

    proptest! {
        #[test]
        fn prop_frame_cycles(max_frame in 2u32..12, steps in 1usize..200, dt in 0.0f32..0.05) {
            let mut s = sprite(1.0 / 12.0);
            let mut advances = 0u32;
            for _ in 0..steps {
                let before = s.frame;
                advance_animation(&mut s, dt, max_frame);
                let after = s.frame;
                prop_assert!(after < max_frame);
                if after != before {
                    prop_assert_eq!(after, (before + 1) % max_frame);
                    advances += 1;
                }
                prop_assert!(s.frame_elapsed >= 0.0);
                prop_assert!(s.frame_elapsed < s.frame_duration);
            }
            prop_assert_eq!(s.frame, advances % max_frame);
        }

        #[test]
        fn prop_returns_to_zero_after_max_frame_advances(max_frame in 1u32..16) {
            let mut s = sprite(0.05);
            for _ in 0..max_frame {
                advance_animation(&mut s, 0.05, max_frame);
            }
            prop_assert_eq!(s.frame, 0);
        }
    }
}
