//! A small 2D rigid-body simulation: circles and oriented squares falling
//! under gravity inside a rectangular domain, bouncing off its walls and
//! floor and off each other.
//!
//! The host drives everything: build a [`Simulation`], call
//! [`Simulation::step`] once per frame with the elapsed time, then read
//! [`Simulation::poses`] to draw.

pub mod collision;
pub mod common;
pub mod config;
pub mod error;
pub mod host;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use common::{Color, Material};
pub use config::{BodyConfig, BroadPhaseMode, SimulationConfig};
pub use error::{PhysicsError, Result};
pub use host::{Clock, FixedClock, Renderer};
pub use math::vec2::Vec2;
pub use objects::rigid_body::RigidBody;
pub use shapes::{Circle, Shape, ShapeKind, Square};
pub use world::{BodyPose, Domain, Simulation};
