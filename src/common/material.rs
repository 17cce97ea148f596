//! Collision response coefficients carried by every body.

use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// How a body responds to wall, floor and body-body contacts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Fraction of normal velocity kept after a bounce. Range [0, 1].
    pub restitution: f64,
    /// Rebound factor for a box hitting a wall while resting on the floor.
    pub friction: f64,
    /// Factor applied to angular velocity on floor and box-box contacts.
    /// Range [0, 1].
    pub spin_damping: f64,
}

impl Material {
    pub fn new(restitution: f64, friction: f64, spin_damping: f64) -> Self {
        Material {
            restitution,
            friction,
            spin_damping,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::invalid_body(format!(
                "restitution must be within [0, 1], got {}",
                self.restitution
            )));
        }
        if !self.friction.is_finite() || self.friction < 0.0 {
            return Err(PhysicsError::invalid_body(format!(
                "friction must be non-negative, got {}",
                self.friction
            )));
        }
        if !(0.0..=1.0).contains(&self.spin_damping) {
            return Err(PhysicsError::invalid_body(format!(
                "spin damping must be within [0, 1], got {}",
                self.spin_damping
            )));
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            restitution: 0.7,
            friction: 0.3,
            spin_damping: 0.7,
        }
    }
}
