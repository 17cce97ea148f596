//! Plain-value construction parameters for a simulation and its bodies.
//!
//! Both structs deserialize with defaults for every omitted field, so a host
//! can describe a scene in JSON (or any serde format) and only spell out what
//! differs. Nothing is checked until [`SimulationConfig::validate`] or
//! [`BodyConfig::validate`] runs; `Simulation::new` and `RigidBody::new` call
//! them for you.

use serde::{Deserialize, Serialize};

use crate::collision::spatial_grid::grid_dimensions;
use crate::common::{Color, Material};
use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::ShapeKind;
use crate::world::Domain;

/// Default gravity, pixels/s² along +y.
pub const DEFAULT_GRAVITY: f64 = 500.0;
/// Largest `dt` a single step will integrate.
pub const DEFAULT_MAX_STEP: f64 = 1.0 / 30.0;

/// Strategy used to find candidate body pairs each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BroadPhaseMode {
    /// Test every pair's bounds. Fine for tens to low hundreds of bodies.
    BruteForce,
    /// Bucket bounds into a uniform grid over the domain first.
    Grid { cell_size: f64 },
}

impl Default for BroadPhaseMode {
    fn default() -> Self {
        BroadPhaseMode::BruteForce
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub domain: Domain,
    pub gravity: f64,
    /// Upper clamp for a frame's `dt`, in seconds.
    pub max_step: f64,
    pub broad_phase: BroadPhaseMode,
}

impl SimulationConfig {
    pub fn new(width: f64, height: f64, gravity: f64) -> Self {
        Self {
            domain: Domain::new_unchecked(width, height),
            gravity,
            ..Self::default()
        }
    }

    pub fn with_broad_phase(mut self, mode: BroadPhaseMode) -> Self {
        self.broad_phase = mode;
        self
    }

    pub fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.domain.validate()?;
        if !self.gravity.is_finite() {
            return Err(PhysicsError::invalid_config(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.max_step.is_finite() && self.max_step > 0.0) {
            return Err(PhysicsError::invalid_config(format!(
                "max_step must be positive, got {}",
                self.max_step
            )));
        }
        if let BroadPhaseMode::Grid { cell_size } = self.broad_phase {
            grid_dimensions(&self.domain.bounds(), cell_size)?;
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            domain: Domain::new_unchecked(800.0, 600.0),
            gravity: DEFAULT_GRAVITY,
            max_step: DEFAULT_MAX_STEP,
            broad_phase: BroadPhaseMode::default(),
        }
    }
}

/// Everything needed to create one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub shape: ShapeKind,
    pub position: Vec2,
    /// Radius for circles, full edge length for boxes.
    pub extent: f64,
    pub mass: f64,
    pub color: Color,
    pub is_static: bool,
    pub velocity: Vec2,
    pub orientation: f64,
    pub angular_velocity: f64,
    pub material: Material,
}

impl BodyConfig {
    pub fn circle(x: f64, y: f64, radius: f64, mass: f64) -> Self {
        Self {
            shape: ShapeKind::Circle,
            position: Vec2::new(x, y),
            extent: radius,
            mass,
            ..Self::default()
        }
    }

    pub fn square(x: f64, y: f64, size: f64, mass: f64) -> Self {
        Self {
            shape: ShapeKind::Box,
            position: Vec2::new(x, y),
            extent: size,
            mass,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(PhysicsError::invalid_body(format!(
                "extent must be positive, got {}",
                self.extent
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PhysicsError::invalid_body(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if !(self.position.is_finite() && self.velocity.is_finite()) {
            return Err(PhysicsError::invalid_body(
                "position and velocity must be finite",
            ));
        }
        if !(self.orientation.is_finite() && self.angular_velocity.is_finite()) {
            return Err(PhysicsError::invalid_body(
                "orientation and angular velocity must be finite",
            ));
        }
        self.material.validate()
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            position: Vec2::ZERO,
            extent: 1.0,
            mass: 1.0,
            color: Color::default(),
            is_static: false,
            velocity: Vec2::ZERO,
            orientation: 0.0,
            angular_velocity: 0.0,
            material: Material::default(),
        }
    }
}
