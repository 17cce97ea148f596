use log::{debug, trace, warn};

use crate::{
    collision::{self, BroadPhase, CollisionManifold},
    config::{BodyConfig, SimulationConfig},
    error::Result,
    integration::integrator,
    objects::rigid_body::RigidBody,
    shapes::Shape,
};

use super::{BodyPose, Domain};

/// Owns the domain and every body, and advances them one step at a time.
pub struct Simulation {
    bodies: Vec<RigidBody>,           // Indexed by the value `add_body` returned
    domain: Domain,                   // Walls and floor every body is bounced off
    gravity: f64,                     // Downward acceleration along +y
    max_step: f64,                    // Largest dt integrated in one step
    broad_phase: BroadPhase,          // Candidate pair finder
    contacts: Vec<CollisionManifold>, // Contacts resolved during the last step
}

impl Simulation {
    /// Creates an empty simulation.
    ///
    /// # Arguments
    /// * `config` - Domain, gravity, step limit and broad-phase strategy.
    ///
    /// # Errors
    /// Returns `InvalidDomain` or `InvalidConfig` when `config` fails
    /// validation. Nothing is allocated in that case.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "simulation: domain {}x{}, gravity {}, max_step {:.4}s, broad phase {:?}",
            config.domain.width(),
            config.domain.height(),
            config.gravity,
            config.max_step,
            config.broad_phase
        );
        Ok(Self {
            bodies: Vec::new(),
            domain: config.domain,
            gravity: config.gravity,
            max_step: config.max_step,
            broad_phase: BroadPhase::new(config.broad_phase, &config.domain)?,
            contacts: Vec::new(),
        })
    }

    /// Creates a simulation populated with `bodies`, in order.
    pub fn with_bodies(config: SimulationConfig, bodies: &[BodyConfig]) -> Result<Self> {
        let mut sim = Self::new(config)?;
        for body in bodies {
            sim.add_body(body)?;
        }
        Ok(sim)
    }

    /// Adds a body and returns its index. Indices are stable for the
    /// simulation's lifetime.
    pub fn add_body(&mut self, config: &BodyConfig) -> Result<usize> {
        let body = RigidBody::new(config)?;
        let index = self.bodies.len();
        self.bodies.push(body);
        Ok(index)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    /// Render poses in body order.
    pub fn poses(&self) -> impl Iterator<Item = BodyPose> + '_ {
        self.bodies.iter().map(BodyPose::from)
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Body-body contacts resolved during the last step.
    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// # Arguments
    /// * `dt` - Elapsed time in seconds. A non-positive or non-finite value
    ///   is a paused clock: bodies are left alone and `contacts()` is emptied.
    ///   Values above `max_step` are clamped to it.
    ///
    /// Each body is integrated and bounced off the domain, then overlapping
    /// pairs are pushed apart and given a restitution impulse.
    pub fn step(&mut self, dt: f64) {
        self.contacts.clear();
        if !dt.is_finite() || dt <= 0.0 {
            trace!("skipping step with dt={dt}");
            return;
        }
        let dt = if dt > self.max_step {
            warn!("clamping dt {:.4}s to {:.4}s", dt, self.max_step);
            self.max_step
        } else {
            dt
        };

        // 1. Integrate and handle walls
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, dt, self.gravity);
            collision::collide_with_domain(body, &self.domain);
        }

        // 2. Body-body collisions
        let pairs = self.broad_phase.find_pairs(&self.bodies);
        for (i, j) in pairs {
            let Some(manifold) = collision::check_collision(&self.bodies[i], i, &self.bodies[j], j)
            else {
                continue;
            };
            trace!(
                "contact {}-{}: normal={:?} depth={:.4}",
                i,
                j,
                manifold.normal,
                manifold.depth
            );
            self.apply_positional_correction(&manifold);
            self.apply_collision_impulse(&manifold);
            self.contacts.push(manifold);
        }

        // 3. Keep push-outs from carrying bodies through a wall
        if !self.contacts.is_empty() {
            for body in self.bodies.iter_mut() {
                collision::contain(body, &self.domain);
            }
        }
    }

    /// Mutable references to both bodies of a manifold (`a < b`).
    fn pair_mut(&mut self, manifold: &CollisionManifold) -> (&mut RigidBody, &mut RigidBody) {
        let (head, tail) = self.bodies.split_at_mut(manifold.body_b_idx);
        (&mut head[manifold.body_a_idx], &mut tail[0])
    }

    /// Moves the bodies apart by the full penetration depth, split by
    /// inverse mass, so they end exactly touching.
    fn apply_positional_correction(&mut self, manifold: &CollisionManifold) {
        let (body_a, body_b) = self.pair_mut(manifold);

        let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
        if total_inv_mass <= 0.0 {
            return;
        }

        let correction = manifold.normal * (manifold.depth / total_inv_mass);
        body_a.position -= correction * body_a.inv_mass;
        body_b.position += correction * body_b.inv_mass;
    }

    /// Applies a restitution impulse along the normal when the bodies are
    /// approaching, and damps box-box spin.
    fn apply_collision_impulse(&mut self, manifold: &CollisionManifold) {
        let (body_a, body_b) = self.pair_mut(manifold);

        if let (Shape::Square(_), Shape::Square(_)) = (&body_a.shape, &body_b.shape) {
            for body in [&mut *body_a, &mut *body_b] {
                if !body.is_static {
                    body.angular_velocity *= body.material.spin_damping;
                }
            }
        }

        let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
        if total_inv_mass <= 0.0 {
            return;
        }

        let relative_velocity_normal = (body_b.velocity - body_a.velocity).dot(manifold.normal);
        if relative_velocity_normal > 0.0 {
            // Already separating
            return;
        }

        let e = body_a.material.restitution.min(body_b.material.restitution);
        let j = -(1.0 + e) * relative_velocity_normal / total_inv_mass;

        let impulse = manifold.normal * j;
        body_a.velocity -= impulse * body_a.inv_mass;
        body_b.velocity += impulse * body_b.inv_mass;
    }
}
