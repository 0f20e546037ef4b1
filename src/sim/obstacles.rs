//! Nebula obstacle field
//!
//! Nebulae drift left at a constant speed and re-enter at the right window
//! edge once fully off screen. Each one wraps and animates independently.

use super::anim::Sprite;
use crate::consts::{NEBULA_MAX_FRAME, NEBULA_VELOCITY};

/// Move every nebula, wrapping those that left the screen.
///
/// Returns how many wrapped this frame.
pub fn drift(nebulae: &mut [Sprite], dt: f32, window_width: f32) -> usize {
    let mut wrapped = 0;
    for (i, nebula) in nebulae.iter_mut().enumerate() {
        nebula.pos.x += NEBULA_VELOCITY * dt;
        if nebula.pos.x <= -nebula.rect.width {
            // Re-enter at the edge itself, leaving a short gap before it shows
            nebula.pos.x = window_width;
            wrapped += 1;
            log::debug!("nebula {} wrapped", i);
        }
    }
    wrapped
}

/// Step every nebula's animation
pub fn animate(nebulae: &mut [Sprite], dt: f32) {
    for nebula in nebulae.iter_mut() {
        nebula.animate(dt, NEBULA_MAX_FRAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use glam::Vec2;
    use proptest::prelude::*;

    fn nebula(x: f32) -> Sprite {
        Sprite::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Vec2::new(x, 280.0),
            1.0 / 16.0,
        )
    }

    #[test]
    fn test_drifts_left() {
        let mut field = [nebula(512.0)];
        assert_eq!(drift(&mut field, 0.5, 512.0), 0);
        assert_eq!(field[0].pos.x, 412.0);
    }

    #[test]
    fn test_wraps_to_window_edge() {
        let mut field = [nebula(-95.0), nebula(100.0)];
        assert_eq!(drift(&mut field, 0.1, 512.0), 1);
        assert_eq!(field[0].pos.x, 512.0);
        assert_eq!(field[1].pos.x, 80.0);
    }

    #[test]
    fn test_animate_uses_nebula_cycle() {
        let mut field = [nebula(0.0)];
        for _ in 0..NEBULA_MAX_FRAME {
            animate(&mut field, 1.0);
        }
        assert_eq!(field[0].frame, 0);
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_on_edge(x in -400.0f32..-100.0, dt in 0.0f32..0.1) {
            let mut field = [nebula(x)];
            drift(&mut field, dt, 512.0);
            prop_assert_eq!(field[0].pos.x, 512.0);
        }

        #[test]
        fn prop_wrap_cycle_repeats(dt in 0.005f32..0.05) {
            let mut field = [nebula(512.0)];
            let mut wraps = 0;
            for _ in 0..4000 {
                wraps += drift(&mut field, dt, 512.0);
                prop_assert!(field[0].pos.x > -100.0 - 200.0 * dt);
                prop_assert!(field[0].pos.x <= 512.0);
            }
            prop_assert!(wraps >= 1);
        }
    }
}
