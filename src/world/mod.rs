pub mod domain;
pub mod pose;
pub mod simulation;

pub use domain::Domain;
pub use pose::BodyPose;
pub use simulation::Simulation;
