//! Straight surface segments

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A segment balls collide with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub a: Vec2,
    pub b: Vec2,
}

impl Surface {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Unit normal on the left of `a -> b` (zero for a degenerate segment)
    #[inline]
    pub fn normal(&self) -> Vec2 {
        (self.b - self.a).perp().normalize_or_zero()
    }

    /// Closest point on the segment to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let ab = self.b - self.a;
        let len_sq = ab.length_squared();
        if len_sq < 1e-12 {
            return self.a;
        }
        let t = ((p - self.a).dot(ab) / len_sq).clamp(0.0, 1.0);
        self.a + ab * t
    }

    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        p.distance(self.closest_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_left_hand() {
        let s = Surface::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(s.normal(), Vec2::new(0.0, 1.0));
        let degenerate = Surface::new(Vec2::ONE, Vec2::ONE);
        assert_eq!(degenerate.normal(), Vec2::ZERO);
    }

    #[test]
    fn test_closest_point_clamps_to_ends() {
        let s = Surface::new(Vec2::new(0.2, 0.5), Vec2::new(0.8, 0.5));
        let close = |a: Vec2, b: Vec2| (a - b).length() < 1e-6;
        assert!(close(s.closest_point(Vec2::new(0.5, 0.9)), Vec2::new(0.5, 0.5)));
        assert_eq!(s.closest_point(Vec2::new(0.0, 0.5)), Vec2::new(0.2, 0.5));
        assert!(close(s.closest_point(Vec2::new(1.0, 0.0)), Vec2::new(0.8, 0.5)));
        assert!((s.distance_to(Vec2::new(0.5, 0.6)) - 0.1).abs() < 1e-6);
    }
}
