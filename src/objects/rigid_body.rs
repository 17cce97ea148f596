use crate::collision::AABB;
use crate::common::{Color, Material};
use crate::config::BodyConfig;
use crate::error::Result;
use crate::math::{Transform, Vec2};
use crate::shapes::{Shape, ShapeKind};

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry
    pub shape: Shape,
    pub material: Material,
    pub color: Color,

    // Primary state
    pub position: Vec2, // shape centre, world units
    pub orientation: f64, // radians, only read for boxes
    pub velocity: Vec2,
    pub angular_velocity: f64, // radians per second, free spin

    pub mass: f64,
    pub inv_mass: f64, // 0.0 for static bodies
    pub is_static: bool,

    /// Whether the last boundary pass ended in floor contact.
    pub grounded: bool,
}

impl RigidBody {
    /// Creates a body from its configuration, rejecting non-positive mass or
    /// extent and out-of-range material coefficients.
    ///
    /// Static bodies keep their configured mass but get an inverse mass of
    /// zero, so the resolver treats them as immovable.
    pub fn new(config: &BodyConfig) -> Result<Self> {
        config.validate()?;

        let inv_mass = if config.is_static { 0.0 } else { 1.0 / config.mass };
        let (velocity, angular_velocity) = if config.is_static {
            (Vec2::ZERO, 0.0)
        } else {
            (config.velocity, config.angular_velocity)
        };

        Ok(Self {
            shape: Shape::from_kind(config.shape, config.extent),
            material: config.material,
            color: config.color,
            position: config.position,
            orientation: config.orientation,
            velocity,
            angular_velocity,
            mass: config.mass,
            inv_mass,
            is_static: config.is_static,
            grounded: false,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Radius for circles, edge length for boxes.
    pub fn extent(&self) -> f64 {
        self.shape.extent()
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.orientation)
    }

    /// The four world-space corners of a box, rotated by its orientation.
    /// Circles have no corners.
    pub fn corners(&self) -> Option<[Vec2; 4]> {
        match &self.shape {
            Shape::Square(square) => Some(square.world_corners(self.transform())),
            Shape::Circle(_) => None,
        }
    }

    /// Radius of a circle enclosing the body at any orientation.
    pub fn bounding_radius(&self) -> f64 {
        match &self.shape {
            Shape::Circle(circle) => circle.radius,
            Shape::Square(square) => square.bounding_radius(),
        }
    }

    /// World-space bounds. Boxes use their rotated footprint.
    pub fn aabb(&self) -> AABB {
        match &self.shape {
            Shape::Circle(circle) => circle.aabb(self.position),
            Shape::Square(square) => square.aabb(self.transform()),
        }
    }
}
