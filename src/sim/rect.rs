//! Axis-aligned rectangle geometry for blocks and the paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Check if an x coordinate lies strictly within the horizontal span
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }

    /// Check if a point lies strictly inside the rectangle.
    /// Points on an edge do not count.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.spans_x(p.x) && p.y > self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 40.0, 16.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 36.0);
    }

    #[test]
    fn test_contains_point_interior() {
        let r = Rect::new(0.0, 0.0, 40.0, 16.0);
        assert!(r.contains_point(Vec2::new(20.0, 8.0)));
        assert!(!r.contains_point(Vec2::new(50.0, 8.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_contains_point_edges_excluded() {
        let r = Rect::new(0.0, 0.0, 40.0, 16.0);
        // A point sitting exactly on an edge or corner is outside
        assert!(!r.contains_point(Vec2::new(0.0, 8.0)));
        assert!(!r.contains_point(Vec2::new(40.0, 8.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 0.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 16.0)));
        assert!(!r.contains_point(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_spans_x() {
        let r = Rect::new(10.0, 0.0, 30.0, 16.0);
        assert!(r.spans_x(25.0));
        assert!(!r.spans_x(10.0));
        assert!(!r.spans_x(40.0));
        assert!(!r.spans_x(5.0));
    }
}
