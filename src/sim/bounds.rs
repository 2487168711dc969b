//! Axis-aligned bounding boxes
//!
//! Every entity in the arena exposes its four edges through [`Bounded`];
//! the overlap test is written once against that capability. Arena
//! coordinates: origin top-left, larger y is lower on screen.

/// Four-edge capability for anything occupying an axis-aligned box.
pub trait Bounded {
    fn left(&self) -> f32;
    fn right(&self) -> f32;
    fn top(&self) -> f32;
    fn bottom(&self) -> f32;
}

/// True iff the bounding boxes of `a` and `b` overlap, bounds inclusive.
pub fn intersects(a: &impl Bounded, b: &impl Bounded) -> bool {
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box2 {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    }

    impl Box2 {
        fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
            Self {
                left,
                right,
                top,
                bottom,
            }
        }
    }

    impl Bounded for Box2 {
        fn left(&self) -> f32 {
            self.left
        }
        fn right(&self) -> f32 {
            self.right
        }
        fn top(&self) -> f32 {
            self.top
        }
        fn bottom(&self) -> f32 {
            self.bottom
        }
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Box2::new(0.0, 0.0, 10.0, 10.0);
        let b = Box2::new(5.0, 5.0, 15.0, 15.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_edges_count_as_intersecting() {
        // Inclusive bounds: sharing an edge is a hit
        let a = Box2::new(0.0, 0.0, 10.0, 10.0);
        let b = Box2::new(10.0, 0.0, 20.0, 10.0);
        assert!(intersects(&a, &b));

        let below = Box2::new(0.0, 10.0, 10.0, 20.0);
        assert!(intersects(&a, &below));
    }

    #[test]
    fn test_disjoint_boxes_do_not_intersect() {
        let a = Box2::new(0.0, 0.0, 10.0, 10.0);
        let right = Box2::new(10.1, 0.0, 20.0, 10.0);
        let under = Box2::new(0.0, 11.0, 10.0, 20.0);
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &under));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Box2::new(0.0, 0.0, 100.0, 100.0);
        let inner = Box2::new(40.0, 40.0, 60.0, 60.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }
}
