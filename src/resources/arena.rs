use bevy_ecs::prelude::Resource;

/// Bounds of the flyer scene: a flat ground plane and a square fence.
///
/// The confinement system clamps avatar positions to `±half_extent` on the
/// ground axes and lands them at `ground_level`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Arena {
    pub half_extent: f32,
    pub ground_level: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            half_extent: 15.0,
            ground_level: 0.0,
        }
    }
}
