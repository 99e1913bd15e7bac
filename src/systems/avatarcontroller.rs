//! Avatar controller.
//!
//! Translates the keyboard snapshot into avatar velocity each frame:
//! 1. Horizontal intent from WASD/arrows, normalized so diagonals are not
//!    faster. While a direction is held the horizontal velocity is pinned to
//!    `run_speed`; with no input it decays by `drift_damping`.
//! 2. Jump: only from the ground; sets vertical velocity to `jump_speed` and
//!    marks the avatar airborne until the confinement system lands it.
//! 3. Gravity, always applied, with the fall speed clamped to
//!    `max_fall_speed`.
//!
//! Runs before [`movement`](crate::systems::movement::movement), which
//! integrates the resulting velocity.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::avatar::Avatar;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Horizontal movement intent from the current input state, one unit per
/// held axis. `x` maps to world X, `y` to world Z (negative is away from the
/// camera).
pub fn movement_intent(input: &InputState) -> Vector2 {
    let mut intent = Vector2 { x: 0.0, y: 0.0 };
    if input.maindirection_up.active || input.secondarydirection_up.active {
        intent.y -= 1.0;
    }
    if input.maindirection_down.active || input.secondarydirection_down.active {
        intent.y += 1.0;
    }
    if input.maindirection_left.active || input.secondarydirection_left.active {
        intent.x -= 1.0;
    }
    if input.maindirection_right.active || input.secondarydirection_right.active {
        intent.x += 1.0;
    }
    intent
}

/// Update each avatar's `RigidBody` velocity from input, jump, and gravity.
pub fn avatar_controller(
    mut query: Query<(&mut Avatar, &mut RigidBody)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    let intent = movement_intent(&input);
    let magnitude = (intent.x * intent.x + intent.y * intent.y).sqrt();

    for (mut avatar, mut body) in query.iter_mut() {
        if magnitude > 0.0 {
            body.velocity.x = intent.x / magnitude * avatar.run_speed;
            body.velocity.z = intent.y / magnitude * avatar.run_speed;
        } else {
            let decay = (1.0 - avatar.drift_damping * dt).max(0.0);
            body.velocity.x *= decay;
            body.velocity.z *= decay;
        }

        if input.jump.active && !avatar.airborne {
            body.velocity.y = avatar.jump_speed;
            avatar.airborne = true;
        }

        body.velocity.y -= avatar.gravity * dt;
        if body.velocity.y < -avatar.max_fall_speed {
            body.velocity.y = -avatar.max_fall_speed;
        }
    }
}
