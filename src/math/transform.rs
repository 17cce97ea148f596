use super::vec2::Vec2;

/// Rigid placement of a shape: rotation about the local origin followed by a
/// translation to `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // radians
}

impl Transform {
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Maps a point from local shape space to world space.
    pub fn apply(self, local: Vec2) -> Vec2 {
        self.position + local.rotate(self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
