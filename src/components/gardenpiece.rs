use bevy_ecs::prelude::Component;

/// Tag for every object placed in the garden.
///
/// `order` records the insertion sequence. The garden is append-only and is
/// redrawn oldest-first each frame, so later pieces layer on top; clear-all
/// and save/load address pieces through this tag.
#[derive(Component, Clone, Copy, Debug)]
pub struct GardenPiece {
    pub order: u32,
}
