use crate::collision::AABB;
use crate::math::{Transform, Vec2};

/// A square centred on its body position. `size` is the full edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub size: f64,
}

impl Square {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    pub fn half_extent(&self) -> f64 {
        self.size / 2.0
    }

    /// Radius of the circle that encloses the square at any orientation.
    pub fn bounding_radius(&self) -> f64 {
        self.half_extent() * std::f64::consts::SQRT_2
    }

    /// Corners in local space, counter-clockwise in a y-down frame:
    /// (-,-), (+,-), (+,+), (-,+).
    pub fn local_corners(&self) -> [Vec2; 4] {
        let h = self.half_extent();
        [
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ]
    }

    /// Corners placed in the world by `transform`.
    pub fn world_corners(&self, transform: Transform) -> [Vec2; 4] {
        self.local_corners().map(|c| transform.apply(c))
    }

    /// Bounds of the rotated footprint.
    pub fn aabb(&self, transform: Transform) -> AABB {
        let corners = self.world_corners(transform);
        AABB::from_points(&corners).unwrap_or_else(|| AABB::new(transform.position, transform.position))
    }
}

/// Unit normals of each edge of a closed quad, one per edge.
pub fn edge_normals(corners: &[Vec2; 4]) -> [Vec2; 4] {
    let mut normals = [Vec2::ZERO; 4];
    for (i, normal) in normals.iter_mut().enumerate() {
        let edge = corners[(i + 1) % 4] - corners[i];
        *normal = edge.perpendicular().normalize();
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_local_corners() {
        let corners = Square::new(20.0).local_corners();
        assert_eq!(corners[0], Vec2::new(-10.0, -10.0));
        assert_eq!(corners[2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_world_corners_rotated_quarter_turn() {
        let square = Square::new(2.0);
        let corners = square.world_corners(Transform::new(Vec2::new(5.0, 5.0), PI / 2.0));
        // (-1,-1) rotated by 90 degrees lands on (1,-1).
        assert!((corners[0].x - 6.0).abs() < EPSILON);
        assert!((corners[0].y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_aabb_grows_with_rotation() {
        let square = Square::new(2.0);
        let flat = square.aabb(Transform::new(Vec2::ZERO, 0.0));
        let diamond = square.aabb(Transform::new(Vec2::ZERO, FRAC_PI_4));

        assert!((flat.max.x - 1.0).abs() < EPSILON);
        assert!((diamond.max.x - std::f64::consts::SQRT_2).abs() < EPSILON);
        assert!((diamond.max.x - square.bounding_radius()).abs() < EPSILON);
    }

    #[test]
    fn test_edge_normals_axis_aligned() {
        let corners = Square::new(2.0).local_corners();
        let normals = edge_normals(&corners);
        for n in normals {
            assert!((n.magnitude() - 1.0).abs() < EPSILON);
        }
        // Opposite edges have opposite normals.
        assert!((normals[0] + normals[2]).magnitude() < EPSILON);
        assert!((normals[1] + normals[3]).magnitude() < EPSILON);
        // First edge runs along +x, so its normal is vertical.
        assert!(normals[0].x.abs() < EPSILON);
    }
}
