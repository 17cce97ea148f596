pub mod aabb;
pub mod boundary;
pub mod broad_phase;
pub mod detection;
pub mod manifold;
pub mod spatial_grid;

pub use aabb::AABB;
pub use boundary::{collide_with_domain, contain};
pub use broad_phase::BroadPhase;
pub use detection::*;
pub use manifold::CollisionManifold;
pub use spatial_grid::SpatialGrid;
