//! Circle geometry for ring construction
//!
//! A ring is a circle in working coordinates:
//! - center: position of the ring's major slot
//! - radius: inner or outer ring radius
//!
//! Everything here is pure and tolerance-free. Rounding happens later, when
//! intersections are quantized into point keys.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::angle_around;

/// A circle in working coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Angle of `pos` around this circle's center
    #[inline]
    pub fn angle_of(&self, pos: Vec2) -> f32 {
        angle_around(self.center, pos)
    }

    /// Points common to both boundaries.
    ///
    /// Returns `None` when the circles are apart, one strictly contains the
    /// other, or they are concentric. Tangent circles yield two coincident
    /// points.
    pub fn intersect(&self, other: &Circle) -> Option<[Vec2; 2]> {
        let delta = other.center - self.center;
        let d = delta.length();
        if d == 0.0 || d > self.radius + other.radius || d < (self.radius - other.radius).abs() {
            return None;
        }

        // Distance from self.center to the chord midpoint, along delta
        let a = (self.radius * self.radius - other.radius * other.radius + d * d) / (2.0 * d);
        let h = (self.radius * self.radius - a * a).max(0.0).sqrt();

        let mid = self.center + delta * (a / d);
        let offset = Vec2::new(-delta.y, delta.x) * (h / d);

        Some([mid + offset, mid - offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_two_point_intersection() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 5.0);
        let b = Circle::new(Vec2::new(8.0, 0.0), 5.0);
        let [p, q] = a.intersect(&b).unwrap();
        assert_near(p, Vec2::new(4.0, 3.0));
        assert_near(q, Vec2::new(4.0, -3.0));
    }

    #[test]
    fn test_intersection_lies_on_both_circles() {
        let a = Circle::new(Vec2::new(100.0, 50.0), 200.0);
        let b = Circle::new(Vec2::new(230.0, 140.0), 224.0);
        for p in a.intersect(&b).unwrap() {
            assert!(((p - a.center).length() - a.radius).abs() < 1e-2);
            assert!(((p - b.center).length() - b.radius).abs() < 1e-2);
        }
    }

    #[test]
    fn test_tangent_points_coincide() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 3.0);
        let b = Circle::new(Vec2::new(5.0, 0.0), 2.0);
        let [p, q] = a.intersect(&b).unwrap();
        assert_near(p, q);
        assert_near(p, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_disjoint_and_contained() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 1.0);
        let far = Circle::new(Vec2::new(10.0, 0.0), 1.0);
        let inside = Circle::new(Vec2::new(0.5, 0.0), 5.0);
        assert!(a.intersect(&far).is_none());
        assert!(a.intersect(&inside).is_none());
    }

    #[test]
    fn test_concentric_is_empty() {
        let inner = Circle::new(Vec2::new(3.0, 3.0), 2.0);
        let outer = Circle::new(Vec2::new(3.0, 3.0), 4.0);
        assert!(inner.intersect(&outer).is_none());
        assert!(inner.intersect(&inner).is_none());
    }
}
