//! Chase camera system.
//!
//! Eases the [`FollowCamera`](crate::resources::followcam::FollowCamera)
//! position toward the avatar plus its resting offset and aims it slightly
//! above the avatar. Runs after confinement so the camera never chases a
//! position outside the arena.

use bevy_ecs::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::spaceposition::SpacePosition;
use crate::resources::followcam::FollowCamera;
use crate::resources::worldtime::WorldTime;

/// Ease the camera after the avatar.
pub fn camera_follow(
    mut cam: ResMut<FollowCamera>,
    query: Query<&SpacePosition, With<Avatar>>,
    time: Res<WorldTime>,
) {
    let Some(position) = query.iter().next() else {
        return;
    };
    let blend = (cam.stiffness * time.delta).min(1.0);

    let rest_x = position.pos.x + cam.offset.x;
    let rest_y = position.pos.y + cam.offset.y;
    let rest_z = position.pos.z + cam.offset.z;
    cam.camera.position.x += (rest_x - cam.camera.position.x) * blend;
    cam.camera.position.y += (rest_y - cam.camera.position.y) * blend;
    cam.camera.position.z += (rest_z - cam.camera.position.z) * blend;

    cam.camera.target.x = position.pos.x + cam.look_offset.x;
    cam.camera.target.y = position.pos.y + cam.look_offset.y;
    cam.camera.target.z = position.pos.z + cam.look_offset.z;
}
