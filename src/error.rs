//! Construction-time errors. Stepping a valid simulation cannot fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A body was described with non-positive mass or extent, or with
    /// material coefficients outside their ranges.
    #[error("invalid body configuration: {0}")]
    InvalidBodyConfig(String),

    /// The domain rectangle has a non-positive or non-finite side.
    #[error("invalid domain {width}x{height}: both sides must be positive")]
    InvalidDomain { width: f64, height: f64 },

    /// A simulation-wide parameter is unusable.
    #[error("invalid simulation configuration: {0}")]
    InvalidConfig(String),
}

impl PhysicsError {
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        PhysicsError::InvalidBodyConfig(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        PhysicsError::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PhysicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PhysicsError::invalid_body("mass must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid body configuration: mass must be positive, got 0"
        );

        let err = PhysicsError::InvalidDomain {
            width: 0.0,
            height: 600.0,
        };
        assert!(err.to_string().contains("0x600"));
    }
}
