//! Flyer scene setup.
//!
//! Spawns the avatar at the origin and a few decorative blocks, and inserts
//! the arena bounds and the chase camera.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector3};

use crate::components::avatar::Avatar;
use crate::components::heading::Heading;
use crate::components::prop::Prop;
use crate::components::rigidbody::RigidBody;
use crate::components::spaceposition::SpacePosition;
use crate::resources::arena::Arena;
use crate::resources::followcam::FollowCamera;

/// Floating blocks scattered around the arena: position and color.
const PROP_SPOTS: [(Vector3, Color); 4] = [
    (
        Vector3 {
            x: -8.0,
            y: 1.0,
            z: -8.0,
        },
        Color::new(255, 107, 157, 255),
    ),
    (
        Vector3 {
            x: 10.0,
            y: 1.5,
            z: -5.0,
        },
        Color::new(78, 205, 196, 255),
    ),
    (
        Vector3 {
            x: 5.0,
            y: 0.8,
            z: 8.0,
        },
        Color::new(255, 235, 59, 255),
    ),
    (
        Vector3 {
            x: -10.0,
            y: 1.2,
            z: 5.0,
        },
        Color::new(149, 225, 211, 255),
    ),
];

/// Insert flyer resources and spawn the scene.
pub fn setup(world: &mut World) {
    world.insert_resource(Arena::default());
    world.insert_resource(FollowCamera::default());

    world.spawn((
        SpacePosition::new(0.0, 0.0, 0.0),
        RigidBody::new(),
        Avatar::default(),
        Heading::default(),
    ));

    for (at, color) in PROP_SPOTS {
        world.spawn((
            SpacePosition { pos: at },
            Prop { size: 1.5, color },
        ));
    }
}
