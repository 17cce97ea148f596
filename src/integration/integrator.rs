use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Shape;

/// Advances a body by `dt` with semi-implicit Euler under a downward (+y)
/// `gravity`. Static bodies are left untouched. Only boxes accumulate
/// orientation; circles carry no angular state.
pub fn integrate(body: &mut RigidBody, dt: f64, gravity: f64) {
    if body.is_static {
        return;
    }

    // --- Linear motion --- //
    body.velocity += Vec2::new(0.0, gravity) * dt;
    body.position += body.velocity * dt;

    // --- Angular motion (free spin, no torque) --- //
    if let Shape::Square(_) = body.shape {
        body.orientation += body.angular_velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BodyConfig;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_integrate_gravity_then_position() {
        let mut rb = RigidBody::new(&BodyConfig::circle(0.0, 0.0, 1.0, 1.0)).unwrap();
        integrate(&mut rb, 0.1, 500.0);

        // v = 0 + 500*0.1 = 50; p = 0 + 50*0.1 = 5
        assert!((rb.velocity.y - 50.0).abs() < EPSILON);
        assert!((rb.position.y - 5.0).abs() < EPSILON);
        assert_eq!(rb.velocity.x, 0.0);
    }

    #[test]
    fn test_integrate_keeps_horizontal_velocity() {
        let config = BodyConfig::circle(0.0, 0.0, 1.0, 1.0).with_velocity(Vec2::new(10.0, -5.0));
        let mut rb = RigidBody::new(&config).unwrap();
        integrate(&mut rb, 0.1, 0.0);

        assert!((rb.position.x - 1.0).abs() < EPSILON);
        assert!((rb.position.y - -0.5).abs() < EPSILON);
        assert_eq!(rb.velocity, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_box_spins() {
        let config = BodyConfig::square(0.0, 0.0, 10.0, 1.0).with_angular_velocity(2.0);
        let mut rb = RigidBody::new(&config).unwrap();
        integrate(&mut rb, 0.25, 500.0);

        assert!((rb.orientation - 0.5).abs() < EPSILON);
        assert_eq!(rb.angular_velocity, 2.0);
    }

    #[test]
    fn test_integrate_circle_ignores_spin() {
        let config = BodyConfig::circle(0.0, 0.0, 10.0, 1.0).with_angular_velocity(2.0);
        let mut rb = RigidBody::new(&config).unwrap();
        integrate(&mut rb, 0.25, 500.0);
        assert_eq!(rb.orientation, 0.0);
    }

    #[test]
    fn test_integrate_static_object() {
        let config = BodyConfig::square(1.0, 1.0, 10.0, 1.0).as_static();
        let mut rb = RigidBody::new(&config).unwrap();
        let initial_state = rb.clone();

        integrate(&mut rb, 0.1, 500.0);
        assert_eq!(rb, initial_state);
    }
}
