//! Avatar confinement.
//!
//! Runs after [`movement`](crate::systems::movement::movement): lands the
//! avatar on the ground plane (zeroing vertical velocity and clearing the
//! airborne flag) and clamps the horizontal position to the arena fence.
//! "Stay within visible bounds" is the scene's only positional invariant.

use bevy_ecs::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::rigidbody::RigidBody;
use crate::components::spaceposition::SpacePosition;
use crate::resources::arena::Arena;

/// Clamp avatars to the ground plane and the arena square.
pub fn keep_in_arena(
    arena: Res<Arena>,
    mut query: Query<(&mut SpacePosition, &mut RigidBody, &mut Avatar)>,
) {
    for (mut position, mut body, mut avatar) in query.iter_mut() {
        if position.pos.y <= arena.ground_level {
            position.pos.y = arena.ground_level;
            body.velocity.y = 0.0;
            avatar.airborne = false;
        }

        position.pos.x = position
            .pos
            .x
            .clamp(-arena.half_extent, arena.half_extent);
        position.pos.z = position
            .pos
            .z
            .clamp(-arena.half_extent, arena.half_extent);
    }
}
