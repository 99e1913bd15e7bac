use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Decorative block in the flyer scene. Pure render data.
#[derive(Component, Clone, Copy, Debug)]
pub struct Prop {
    /// Edge length of the cube in world units.
    pub size: f32,
    pub color: Color,
}
