use bevy_ecs::prelude::Resource;

/// Current window dimensions in pixels, refreshed every frame so renderers
/// track live resizes.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}
