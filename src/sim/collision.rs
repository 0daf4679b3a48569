//! Axis-aligned box overlap tests
//!
//! Every box is grown by a fixed margin on all sides before testing, which
//! makes hits forgiving: two boxes collide when the gap between their real
//! edges is less than twice the margin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box (top-left corner + size, screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Overlap test with `margin` added to every side of both boxes
pub fn overlaps_with_margin(a: &Aabb, b: &Aabb, margin: f32) -> bool {
    a.left() - margin < b.right() + margin
        && a.right() + margin > b.left() - margin
        && a.top() - margin < b.bottom() + margin
        && a.bottom() + margin > b.top() - margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(size))
    }

    #[test]
    fn test_plain_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        assert!(overlaps_with_margin(&a, &b, 0.0));
    }

    #[test]
    fn test_margin_bridges_small_gap() {
        let a = square(0.0, 0.0, 10.0);
        // 8 px gap, margins cover 10 px
        let b = square(18.0, 0.0, 10.0);
        assert!(!overlaps_with_margin(&a, &b, 0.0));
        assert!(overlaps_with_margin(&a, &b, 5.0));
    }

    #[test]
    fn test_margin_does_not_bridge_large_gap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(0.0, 25.0, 10.0);
        assert!(!overlaps_with_margin(&a, &b, 5.0));
    }

    #[test]
    fn test_center() {
        let a = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(a.center(), Vec2::new(25.0, 40.0));
    }

    proptest! {
        #[test]
        fn prop_gap_below_twice_margin_collides(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..100.0,
            margin in 0.5f32..20.0,
            frac in 0.0f32..0.95,
            vertical in any::<bool>(),
        ) {
            let gap = 2.0 * margin * frac;
            let a = Aabb::new(Vec2::new(x, y), Vec2::splat(w));
            let b = if vertical {
                Aabb::new(Vec2::new(x, y + w + gap), Vec2::splat(w))
            } else {
                Aabb::new(Vec2::new(x + w + gap, y), Vec2::splat(w))
            };
            prop_assert!(overlaps_with_margin(&a, &b, margin));
            prop_assert!(overlaps_with_margin(&b, &a, margin));
        }

        #[test]
        fn prop_gap_above_twice_margin_misses(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..100.0,
            margin in 0.0f32..20.0,
            extra in 0.5f32..200.0,
            vertical in any::<bool>(),
        ) {
            let gap = 2.0 * margin + extra;
            let a = Aabb::new(Vec2::new(x, y), Vec2::splat(w));
            let b = if vertical {
                Aabb::new(Vec2::new(x, y + w + gap), Vec2::splat(w))
            } else {
                Aabb::new(Vec2::new(x + w + gap, y), Vec2::splat(w))
            };
            prop_assert!(!overlaps_with_margin(&a, &b, margin));
            prop_assert!(!overlaps_with_margin(&b, &a, margin));
        }
    }
}
