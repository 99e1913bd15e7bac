use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// 3D world-space position. Used by the flyer scene.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpacePosition {
    pub pos: Vector3,
}

impl SpacePosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3 { x, y, z },
        }
    }
}
