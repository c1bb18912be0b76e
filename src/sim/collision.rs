//! Axis-aligned rectangle collision
//!
//! Every gameplay entity is a box in arena space (origin top-left, y down).
//! Overlap uses open intervals: boxes that only share an edge do not collide.

use glam::Vec2;

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        rects_overlap(self, other)
    }
}

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> Aabb;

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Check whether two boxes overlap (touching edges do not count)
pub fn rects_overlap(a: &Aabb, b: &Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Index of the first entity overlapping `target`, in collection order
pub fn first_overlap<T: Bounded>(items: &[T], target: &Aabb) -> Option<usize> {
    items.iter().position(|item| item.bounds().overlaps(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_contained() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 2.0, 2.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!rects_overlap(&a, &rect(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!rects_overlap(&a, &rect(0.0, 10.0, 10.0, 10.0)));
        // Shares only a corner
        assert!(!rects_overlap(&a, &rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_separated() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &rect(30.0, 0.0, 5.0, 5.0)));
        assert!(!rects_overlap(&a, &rect(0.0, -20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_center() {
        assert_eq!(rect(10.0, 20.0, 40.0, 60.0).center(), Vec2::new(30.0, 50.0));
    }

    #[test]
    fn test_first_overlap_in_order() {
        struct Dot(Aabb);
        impl Bounded for Dot {
            fn bounds(&self) -> Aabb {
                self.0
            }
        }

        let items = [
            Dot(rect(100.0, 100.0, 5.0, 5.0)),
            Dot(rect(1.0, 1.0, 5.0, 5.0)),
            Dot(rect(2.0, 2.0, 5.0, 5.0)),
        ];
        assert_eq!(first_overlap(&items, &rect(0.0, 0.0, 10.0, 10.0)), Some(1));
        assert_eq!(first_overlap(&items, &rect(300.0, 0.0, 10.0, 10.0)), None);
    }
}
