use crate::math::vec2::Vec2;

/// An axis-aligned bounding box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a box from two opposite corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        AABB {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    /// Smallest box enclosing `points`, or `None` when there are none.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for p in rest {
            min_pt.x = min_pt.x.min(p.x);
            min_pt.y = min_pt.y.min(p.y);
            max_pt.x = max_pt.x.max(p.x);
            max_pt.y = max_pt.y.max(p.y);
        }
        Some(AABB { min: min_pt, max: max_pt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let aabb = AABB::new(Vec2::new(5.0, 1.0), Vec2::new(2.0, 4.0));
        assert_eq!(aabb.min, Vec2::new(2.0, 1.0));
        assert_eq!(aabb.max, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_overlaps() {
        let a = AABB::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = AABB::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        let touching = AABB::new(Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0));
        let far = AABB::new(Vec2::new(10.0, 10.0), Vec2::new(11.0, 11.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_from_points() {
        assert!(AABB::from_points(&[]).is_none());
        let aabb = AABB::from_points(&[
            Vec2::new(1.0, -1.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(1.0, 3.0));
    }
}
