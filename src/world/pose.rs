use crate::common::Color;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::ShapeKind;

/// What a renderer needs to draw one body. Carries no physics state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub position: Vec2,
    pub orientation: f64,
    pub shape_kind: ShapeKind,
    /// Radius for circles, edge length for boxes.
    pub extent: f64,
    pub color: Color,
}

impl From<&RigidBody> for BodyPose {
    fn from(body: &RigidBody) -> Self {
        BodyPose {
            position: body.position,
            orientation: body.orientation,
            shape_kind: body.kind(),
            extent: body.extent(),
            color: body.color,
        }
    }
}
