//! Wall and floor response against the simulation [`Domain`].
//!
//! The two shapes follow different rules:
//!
//! * Circles bounce off the right wall and the floor only. Nothing stops a
//!   circle leaving through the left edge or the top.
//! * Boxes test the floor first (which refreshes `grounded`), then the right
//!   and left walls. A grounded box rebounds off a wall with its friction
//!   coefficient instead of its restitution. Wall tests use the unrotated
//!   edge length, and the floor test uses half of it.

use crate::objects::rigid_body::RigidBody;
use crate::shapes::{Circle, Shape, Square};
use crate::world::Domain;

/// Clamps a dynamic body back inside its walls and reflects the offending
/// velocity component. Static bodies are ignored.
pub fn collide_with_domain(body: &mut RigidBody, domain: &Domain) {
    if body.is_static {
        return;
    }
    match body.shape {
        Shape::Circle(circle) => collide_circle(body, circle, domain),
        Shape::Square(square) => collide_square(body, square, domain),
    }
}

fn collide_circle(body: &mut RigidBody, circle: Circle, domain: &Domain) {
    let r = circle.radius;
    let bounce = body.material.restitution;

    if body.position.x + r > domain.width() {
        body.position.x = domain.width() - r;
        body.velocity.x *= -bounce;
    }

    if body.position.y + r > domain.height() {
        body.position.y = domain.height() - r;
        body.velocity.y *= -bounce;
    }
}

fn collide_square(body: &mut RigidBody, square: Square, domain: &Domain) {
    let size = square.size;
    let half = square.half_extent();
    let bounce = body.material.restitution;

    // Floor first so the wall response below sees this step's contact.
    if body.position.y + half > domain.height() {
        body.position.y = domain.height() - half;
        body.velocity.y *= -bounce;
        body.angular_velocity *= body.material.spin_damping;
        body.grounded = true;
    } else {
        body.grounded = false;
    }

    let wall_factor = if body.grounded {
        body.material.friction
    } else {
        bounce
    };

    if body.position.x + size > domain.width() {
        body.position.x = domain.width() - size;
        body.velocity.x *= -wall_factor;
    }

    if body.position.x + size <= -size {
        body.position.x = -size;
        body.velocity.x *= -wall_factor;
    }
}

/// Position-only clamp to the same limits `collide_with_domain` enforces.
/// Used after body-body push-out; velocities and `grounded` are untouched.
pub fn contain(body: &mut RigidBody, domain: &Domain) {
    if body.is_static {
        return;
    }
    match body.shape {
        Shape::Circle(circle) => {
            body.position.x = body.position.x.min(domain.width() - circle.radius);
            body.position.y = body.position.y.min(domain.height() - circle.radius);
        }
        Shape::Square(square) => {
            body.position.y = body.position.y.min(domain.height() - square.half_extent());
            body.position.x = body.position.x.min(domain.width() - square.size);
            if body.position.x + square.size <= -square.size {
                body.position.x = -square.size;
            }
        }
    }
}
