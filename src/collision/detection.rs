//! Narrow phase: exact overlap tests producing a [`CollisionManifold`].

use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::{edge_normals, Shape};

/// Overlap test between two circles given by centre and radius.
/// Coincident centres fall back to a +y normal.
fn check_circles(
    center_a: Vec2,
    radius_a: f64,
    body_a_idx: usize,
    center_b: Vec2,
    radius_b: f64,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let dist_vec = center_b - center_a;
    let dist_sq = dist_vec.magnitude_squared();
    let radii_sum = radius_a + radius_b;

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    let normal = if distance > 1e-10 {
        dist_vec * (1.0 / distance)
    } else {
        Vec2::UNIT_Y
    };

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal,
        depth: radii_sum - distance,
    })
}

/// Checks for collision between two circles.
pub fn check_circle_circle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let (Shape::Circle(circle_a), Shape::Circle(circle_b)) = (&body_a.shape, &body_b.shape) else {
        return None;
    };
    check_circles(
        body_a.position,
        circle_a.radius,
        body_a_idx,
        body_b.position,
        circle_b.radius,
        body_b_idx,
    )
}

/// Checks a circle against a box, approximating the box by its bounding
/// circle. Either body may be the circle; the normal still points from A
/// to B.
pub fn check_circle_box(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(_), Shape::Square(_)) | (Shape::Square(_), Shape::Circle(_)) => {
            check_circles(
                body_a.position,
                body_a.bounding_radius(),
                body_a_idx,
                body_b.position,
                body_b.bounding_radius(),
                body_b_idx,
            )
        }
        _ => None,
    }
}

/// Projects a set of world-space points onto `axis`, returning (min, max).
fn project_onto_axis(points: &[Vec2], axis: Vec2) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let proj = p.dot(axis);
        (lo.min(proj), hi.max(proj))
    })
}

/// Separating-axis test between two oriented boxes over the edge normals of
/// both. The returned normal is the axis of least overlap (the minimum
/// translation vector direction), oriented from A to B.
pub fn check_box_box(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let corners_a = body_a.corners()?;
    let corners_b = body_b.corners()?;

    let mut min_overlap = f64::INFINITY;
    let mut mtv_axis = Vec2::ZERO;

    let axes = edge_normals(&corners_a).into_iter().chain(edge_normals(&corners_b));
    for axis in axes {
        if axis.magnitude_squared() < 1e-10 {
            continue;
        }

        let (min_a, max_a) = project_onto_axis(&corners_a, axis);
        let (min_b, max_b) = project_onto_axis(&corners_b, axis);

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap <= 0.0 {
            // Separating axis found.
            return None;
        }

        if overlap < min_overlap {
            min_overlap = overlap;
            mtv_axis = axis;
        }
    }

    if (body_b.position - body_a.position).dot(mtv_axis) < 0.0 {
        mtv_axis = -mtv_axis;
    }

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal: mtv_axis,
        depth: min_overlap,
    })
}

/// Dispatches to the narrow-phase test for the pair's shapes.
pub fn check_collision(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(_), Shape::Circle(_)) => {
            check_circle_circle(body_a, body_a_idx, body_b, body_b_idx)
        }
        (Shape::Square(_), Shape::Square(_)) => {
            check_box_box(body_a, body_a_idx, body_b, body_b_idx)
        }
        _ => check_circle_box(body_a, body_a_idx, body_b, body_b_idx),
    }
}
