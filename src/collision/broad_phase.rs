//! Broad phase: cheap bounding-box culling before the narrow phase.

use super::aabb::AABB;
use super::spatial_grid::SpatialGrid;
use crate::config::BroadPhaseMode;
use crate::error::Result;
use crate::objects::rigid_body::RigidBody;
use crate::world::Domain;

/// Candidate pair finder. Both strategies return the same pairs: `(i, j)`
/// with `i < j`, sorted, bounds overlapping, and never two static bodies.
#[derive(Debug)]
pub enum BroadPhase {
    BruteForce,
    Grid(SpatialGrid),
}

impl BroadPhase {
    /// Fails only for a grid whose cell size the domain cannot hold.
    pub fn new(mode: BroadPhaseMode, domain: &Domain) -> Result<Self> {
        Ok(match mode {
            BroadPhaseMode::BruteForce => BroadPhase::BruteForce,
            BroadPhaseMode::Grid { cell_size } => {
                BroadPhase::Grid(SpatialGrid::new(domain.bounds(), cell_size)?)
            }
        })
    }

    pub fn find_pairs(&mut self, bodies: &[RigidBody]) -> Vec<(usize, usize)> {
        let bounds: Vec<AABB> = bodies.iter().map(RigidBody::aabb).collect();
        match self {
            BroadPhase::BruteForce => brute_force_pairs(bodies, &bounds),
            BroadPhase::Grid(grid) => {
                grid.clear();
                for (i, aabb) in bounds.iter().enumerate() {
                    grid.insert(i, aabb);
                }
                grid.query_potential_pairs()
                    .into_iter()
                    .filter(|&(i, j)| is_candidate(bodies, &bounds, i, j))
                    .collect()
            }
        }
    }
}

fn is_candidate(bodies: &[RigidBody], bounds: &[AABB], i: usize, j: usize) -> bool {
    if bodies[i].is_static && bodies[j].is_static {
        return false;
    }
    bounds[i].overlaps(&bounds[j])
}

fn brute_force_pairs(bodies: &[RigidBody], bounds: &[AABB]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if is_candidate(bodies, bounds, i, j) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BodyConfig;

    fn domain() -> Domain {
        Domain::new(100.0, 100.0).unwrap()
    }

    fn bodies(configs: &[BodyConfig]) -> Vec<RigidBody> {
        configs.iter().map(|c| RigidBody::new(c).unwrap()).collect()
    }

    fn both_modes() -> [BroadPhase; 2] {
        [
            BroadPhase::new(BroadPhaseMode::BruteForce, &domain()).unwrap(),
            BroadPhase::new(BroadPhaseMode::Grid { cell_size: 10.0 }, &domain()).unwrap(),
        ]
    }

    #[test]
    fn test_disjoint_bounds_yield_no_pairs() {
        let set = bodies(&[
            BodyConfig::circle(10.0, 10.0, 5.0, 1.0),
            BodyConfig::circle(30.0, 10.0, 5.0, 1.0),
            BodyConfig::circle(10.0, 30.0, 5.0, 1.0),
        ]);
        for mut bp in both_modes() {
            assert!(bp.find_pairs(&set).is_empty());
        }
    }

    #[test]
    fn test_overlapping_bounds_are_paired() {
        let set = bodies(&[
            BodyConfig::circle(10.0, 10.0, 5.0, 1.0),
            BodyConfig::square(80.0, 80.0, 10.0, 1.0),
            BodyConfig::circle(18.0, 12.0, 5.0, 1.0),
            BodyConfig::square(86.0, 84.0, 10.0, 1.0),
        ]);
        for mut bp in both_modes() {
            assert_eq!(bp.find_pairs(&set), vec![(0, 2), (1, 3)]);
        }
    }

    #[test]
    fn test_rotation_expands_box_bounds() {
        // Flat boxes are 1 unit apart; at 45 degrees their corners reach over.
        let flat = bodies(&[
            BodyConfig::square(50.0, 50.0, 10.0, 1.0),
            BodyConfig::square(61.0, 50.0, 10.0, 1.0),
        ]);
        let tilted = bodies(&[
            BodyConfig::square(50.0, 50.0, 10.0, 1.0).with_orientation(std::f64::consts::FRAC_PI_4),
            BodyConfig::square(61.0, 50.0, 10.0, 1.0),
        ]);
        for mut bp in both_modes() {
            assert!(bp.find_pairs(&flat).is_empty());
            assert_eq!(bp.find_pairs(&tilted), vec![(0, 1)]);
        }
    }

    #[test]
    fn test_static_pairs_skipped() {
        let set = bodies(&[
            BodyConfig::square(50.0, 50.0, 10.0, 1.0).as_static(),
            BodyConfig::square(55.0, 50.0, 10.0, 1.0).as_static(),
            BodyConfig::circle(50.0, 45.0, 4.0, 1.0),
        ]);
        for mut bp in both_modes() {
            assert_eq!(bp.find_pairs(&set), vec![(0, 2), (1, 2)]);
        }
    }

    #[test]
    fn test_grid_finds_pairs_outside_domain() {
        // Circles may leave through the left edge; they still collide there.
        let set = bodies(&[
            BodyConfig::circle(-200.0, 50.0, 5.0, 1.0),
            BodyConfig::circle(-195.0, 50.0, 5.0, 1.0),
        ]);
        let mut grid = BroadPhase::new(BroadPhaseMode::Grid { cell_size: 10.0 }, &domain()).unwrap();
        assert_eq!(grid.find_pairs(&set), vec![(0, 1)]);
    }
}
