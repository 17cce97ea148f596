pub mod circle;
pub mod square;

pub use circle::Circle;
pub use square::{edge_normals, Square};

use serde::{Deserialize, Serialize};

/// Geometric shape of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
}

/// Shape tag used in configuration and render poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Box,
}

impl Shape {
    /// Builds a shape from its tag and "size": radius for circles, edge
    /// length for boxes.
    pub fn from_kind(kind: ShapeKind, extent: f64) -> Self {
        match kind {
            ShapeKind::Circle => Shape::Circle(Circle::new(extent)),
            ShapeKind::Box => Shape::Square(Square::new(extent)),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Box,
        }
    }

    pub fn extent(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.radius,
            Shape::Square(s) => s.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_roundtrips_extent() {
        let circle = Shape::from_kind(ShapeKind::Circle, 30.0);
        assert_eq!(circle, Shape::Circle(Circle::new(30.0)));
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert_eq!(circle.extent(), 30.0);

        let square = Shape::from_kind(ShapeKind::Box, 20.0);
        assert_eq!(square.kind(), ShapeKind::Box);
        assert_eq!(square.extent(), 20.0);
    }
}
