//! Heading system.
//!
//! Eases each avatar's yaw toward the direction it is moving, along the
//! shortest arc. Facing only updates while there is meaningful horizontal
//! speed, so the avatar keeps its last heading while drifting to a stop.

use bevy_ecs::prelude::*;

use crate::components::heading::Heading;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Horizontal speed below which facing is left untouched.
const MIN_TURN_SPEED: f32 = 0.5;

/// Wrap an angle in degrees into [-180, 180).
pub fn wrap_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Ease yaw toward the motion direction.
pub fn heading_system(mut query: Query<(&mut Heading, &RigidBody)>, time: Res<WorldTime>) {
    for (mut heading, body) in query.iter_mut() {
        if body.horizontal_speed() < MIN_TURN_SPEED {
            continue;
        }
        let target = body.velocity.x.atan2(body.velocity.z).to_degrees();
        let diff = wrap_degrees(target - heading.yaw_degrees);
        let blend = (heading.turn_rate * time.delta).min(1.0);
        heading.yaw_degrees = wrap_degrees(heading.yaw_degrees + diff * blend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees_identity_in_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(-179.0), -179.0);
        assert_eq!(wrap_degrees(179.0), 179.0);
    }

    #[test]
    fn test_wrap_degrees_wraps_over() {
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(270.0), -90.0);
        assert_eq!(wrap_degrees(-270.0), 90.0);
        assert_eq!(wrap_degrees(540.0), -180.0);
    }
}
