//! Parallax background scrolling
//!
//! Each layer is drawn twice side by side at [`LAYER_SCALE`] so one copy always
//! covers the gap the other leaves while it scrolls off to the left.

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_SPEED, FOREGROUND_SPEED, LAYER_SCALE, MIDGROUND_SPEED};

/// One horizontally scrolling layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollLayer {
    /// Current x of the first copy (always <= 0 once scrolling)
    pub offset: f32,
    /// Scroll speed (pixels/s)
    pub speed: f32,
    /// Native texture width
    pub width: f32,
}

impl ScrollLayer {
    pub fn new(speed: f32, width: f32) -> Self {
        Self {
            offset: 0.0,
            speed,
            width,
        }
    }

    /// On-screen width of one copy
    #[inline]
    pub fn span(&self) -> f32 {
        self.width * LAYER_SCALE
    }

    /// Scroll left by `speed * dt`, snapping back to 0 after a full span
    pub fn advance(&mut self, dt: f32) {
        self.offset -= self.speed * dt;
        if self.offset <= -self.span() {
            self.offset = 0.0;
        }
    }

    /// X positions of the two copies to draw
    pub fn draw_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.span()]
    }
}

/// Background, midground and foreground layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallax {
    pub background: ScrollLayer,
    pub midground: ScrollLayer,
    pub foreground: ScrollLayer,
}

impl Parallax {
    /// Layers at rest, given the native texture widths back to front
    pub fn new(widths: [f32; 3]) -> Self {
        Self {
            background: ScrollLayer::new(BACKGROUND_SPEED, widths[0]),
            midground: ScrollLayer::new(MIDGROUND_SPEED, widths[1]),
            foreground: ScrollLayer::new(FOREGROUND_SPEED, widths[2]),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.background.advance(dt);
        self.midground.advance(dt);
        self.foreground.advance(dt);
    }

    /// Layers in draw order, furthest first
    pub fn layers(&self) -> [&ScrollLayer; 3] {
        [&self.background, &self.midground, &self.foreground]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_speeds_increase_toward_viewer() {
        let p = Parallax::new([272.0, 272.0, 352.0]);
        assert!(p.background.speed < p.midground.speed);
        assert!(p.midground.speed < p.foreground.speed);
    }

    #[test]
    fn test_advance_scrolls_left() {
        let mut layer = ScrollLayer::new(80.0, 352.0);
        layer.advance(0.5);
        assert_eq!(layer.offset, -40.0);
    }

    #[test]
    fn test_resets_on_crossing_span() {
        let mut layer = ScrollLayer::new(20.0, 100.0);
        layer.offset = -199.0;
        layer.advance(0.1);
        assert_eq!(layer.offset, 0.0);
    }

    #[test]
    fn test_draw_positions_are_adjacent() {
        let mut layer = ScrollLayer::new(40.0, 272.0);
        layer.offset = -100.0;
        assert_eq!(layer.draw_positions(), [-100.0, 444.0]);
    }

    proptest! {
        #[test]
        fn prop_offset_stays_in_range(
            width in 16.0f32..600.0,
            speed in 1.0f32..200.0,
            dts in proptest::collection::vec(0.0f32..0.1, 1..500),
        ) {
            let mut layer = ScrollLayer::new(speed, width);
            for dt in dts {
                layer.advance(dt);
                prop_assert!(layer.offset <= 0.0);
                prop_assert!(layer.offset > -layer.span());
            }
        }
    }
}
