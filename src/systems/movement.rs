use bevy_ecs::prelude::*;

use crate::components::rigidbody::RigidBody;
use crate::components::spaceposition::SpacePosition;
use crate::resources::worldtime::WorldTime;

/// Integrate rigid body velocities into positions.
pub fn movement(mut query: Query<(&mut SpacePosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos.x += rigidbody.velocity.x * time.delta;
        position.pos.y += rigidbody.velocity.y * time.delta;
        position.pos.z += rigidbody.velocity.z * time.delta;
    }
}
