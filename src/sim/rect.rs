//! Axis-aligned rectangles
//!
//! Used both as sprite-sheet source regions and as collision boxes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of this size placed at `pos`
    pub fn at(&self, pos: Vec2) -> Self {
        Self::new(pos.x, pos.y, self.width, self.height)
    }

    /// Shrink by `pad` on every side
    pub fn inset(&self, pad: f32) -> Self {
        Self::new(
            self.x + pad,
            self.y + pad,
            self.width - 2.0 * pad,
            self.height - 2.0 * pad,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// AABB overlap test. Boxes that only touch along an edge count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let r = Rect::new(10.0, 20.0, 100.0, 80.0).inset(20.0);
        assert_eq!(r, Rect::new(30.0, 40.0, 60.0, 40.0));
    }

    #[test]
    fn test_at_keeps_size() {
        let r = Rect::new(300.0, 0.0, 100.0, 100.0).at(Vec2::new(5.0, 6.0));
        assert_eq!(r, Rect::new(5.0, 6.0, 100.0, 100.0));
    }

    #[test]
    fn test_overlap_and_separation() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(11.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.5, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shared vertical edge
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shared corner
        assert!(a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
    }
}
