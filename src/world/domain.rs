use serde::{Deserialize, Serialize};

use crate::collision::AABB;
use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;

/// The axis-aligned rectangle (0,0)-(width,height) bodies live in.
/// The floor is the `y = height` edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    width: f64,
    height: f64,
}

impl Domain {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let domain = Self::new_unchecked(width, height);
        domain.validate()?;
        Ok(domain)
    }

    pub(crate) fn new_unchecked(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(self.width) && positive(self.height) {
            Ok(())
        } else {
            Err(PhysicsError::InvalidDomain {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_new() {
        let d = Domain::new(800.0, 600.0).unwrap();
        assert_eq!(d.width(), 800.0);
        assert_eq!(d.height(), 600.0);
        assert_eq!(d.bounds().max, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_domain_rejects_non_positive_sides() {
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f64::INFINITY, 10.0), (f64::NAN, 10.0)] {
            assert!(matches!(
                Domain::new(w, h),
                Err(PhysicsError::InvalidDomain { .. })
            ));
        }
    }
}
