//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity consumed by the movement
//! system to advance [`SpacePosition`](super::spaceposition::SpacePosition).
//! Velocity shaping (input response, gravity, damping) is done by controller
//! systems; this component only carries the result between them.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector3,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        }
    }

    /// Speed over the ground plane, ignoring the vertical component.
    pub fn horizontal_speed(&self) -> f32 {
        (self.velocity.x * self.velocity.x + self.velocity.z * self.velocity.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.velocity.z, 0.0));
    }

    #[test]
    fn test_horizontal_speed_ignores_vertical() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector3 {
            x: 3.0,
            y: 100.0,
            z: 4.0,
        };
        assert!(approx_eq(rb.horizontal_speed(), 5.0));
    }

    #[test]
    fn test_horizontal_speed_at_rest_is_zero() {
        let rb = RigidBody::default();
        assert!(approx_eq(rb.horizontal_speed(), 0.0));
    }
}
