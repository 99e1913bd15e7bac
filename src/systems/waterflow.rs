//! Water flow system.
//!
//! Animates drops along every [`WaterCourse`]:
//! - courses with at least two points spawn a drop on a fixed cadence, with
//!   per-drop speed/size/alpha rolled at spawn; a catch-up loop emits
//!   several drops when the frame delta is large.
//! - each drop advances by `speed * delta` along its segment and hops to the
//!   next segment when it completes one, wrapping back to the first segment
//!   after the last — a single circular counter.
//!
//! Drops are transient animation state; they are not saved with the garden
//! and simply regrow after a load.

use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::components::watercourse::{WaterCourse, WaterDrop};
use crate::resources::worldtime::WorldTime;

/// Seconds between drop spawns on a flowing course.
pub const DROP_SPAWN_PERIOD: f32 = 0.05;

/// Spawn and advance water drops.
pub fn water_flow(mut query: Query<&mut WaterCourse>, time: Res<WorldTime>, mut rng: Local<Rng>) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for mut course in query.iter_mut() {
        let segments = course.segment_count();
        if segments < 1 {
            continue;
        }

        course.spawn_timer += dt;
        while course.spawn_timer >= DROP_SPAWN_PERIOD {
            course.spawn_timer -= DROP_SPAWN_PERIOD;
            let drop = WaterDrop {
                segment: 0,
                progress: 0.0,
                speed: 0.12 + rng.f32() * 0.18,
                radius: 1.0 + rng.f32() * 1.5,
                alpha: ((0.5 + rng.f32() * 0.5) * 255.0) as u8,
            };
            course.drops.push(drop);
        }

        for drop in course.drops.iter_mut() {
            drop.progress += drop.speed * dt;
            if drop.progress >= 1.0 {
                drop.progress = 0.0;
                drop.segment += 1;
                if drop.segment >= segments {
                    // Loop back to the source
                    drop.segment = 0;
                }
            }
        }
    }
}
