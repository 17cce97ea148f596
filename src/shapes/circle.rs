use crate::collision::AABB;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// World-space bounds for a circle centred at `center`.
    pub fn aabb(&self, center: Vec2) -> AABB {
        let r = Vec2::new(self.radius, self.radius);
        AABB::new(center - r, center + r)
    }
}
