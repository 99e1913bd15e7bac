//! Procedurally generated plants.
//!
//! Three plant kinds share one component: a tree (trunk plus two foliage
//! discs), a bamboo cluster (3-5 stalks with segment rings), and a shrub
//! (5-9 scattered tufts). Every random parameter is rolled once at placement
//! and stored, so the plant looks the same on every redraw.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::{Color, Vector2};

/// One bamboo stalk.
#[derive(Clone, Copy, Debug)]
pub struct Stalk {
    /// Horizontal offset from the plant anchor.
    pub x_offset: f32,
    pub height: f32,
    pub width: f32,
    pub color: Color,
}

/// One shrub tuft.
#[derive(Clone, Copy, Debug)]
pub struct Tuft {
    /// Offset from the plant anchor.
    pub offset: Vector2,
    pub radius: f32,
    pub color: Color,
}

/// Kind-specific pre-rolled parameters.
#[derive(Clone, Debug)]
pub enum PlantKind {
    Tree {
        trunk_height: f32,
        trunk_width: f32,
        foliage_radius: f32,
        canopy: Color,
        canopy_shade: Color,
    },
    Bamboo {
        stalks: Vec<Stalk>,
    },
    Shrub {
        tufts: Vec<Tuft>,
    },
}

/// Pre-rolled plant, anchored at its
/// [`MapPosition`](super::mapposition::MapPosition) (the base of the trunk
/// or cluster).
#[derive(Component, Clone, Debug)]
pub struct Plant {
    pub kind: PlantKind,
}

impl Plant {
    /// Roll a plant of a uniformly random kind.
    pub fn generate(rng: &mut Rng) -> Self {
        match rng.usize(0..3) {
            0 => Self::tree(rng),
            1 => Self::bamboo(rng),
            _ => Self::shrub(rng),
        }
    }

    pub fn tree(rng: &mut Rng) -> Self {
        Self {
            kind: PlantKind::Tree {
                trunk_height: 40.0 + rng.f32() * 20.0,
                trunk_width: 8.0 + rng.f32() * 4.0,
                foliage_radius: 20.0 + rng.f32() * 10.0,
                canopy: Color::new(30, 100 + (rng.f32() * 30.0) as u8, 40, 255),
                canopy_shade: Color::new(40, 120 + (rng.f32() * 40.0) as u8, 50, 255),
            },
        }
    }

    pub fn bamboo(rng: &mut Rng) -> Self {
        let count = 3 + rng.usize(0..3);
        let mut stalks = Vec::with_capacity(count);
        for i in 0..count {
            stalks.push(Stalk {
                x_offset: (i as f32 - (count / 2) as f32) * 12.0 + (rng.f32() * 8.0 - 4.0),
                height: 60.0 + rng.f32() * 40.0,
                width: 6.0 + rng.f32() * 3.0,
                color: Color::new(50, 150 + (rng.f32() * 50.0) as u8, 80, 255),
            });
        }
        Self {
            kind: PlantKind::Bamboo { stalks },
        }
    }

    pub fn shrub(rng: &mut Rng) -> Self {
        let count = 5 + rng.usize(0..5);
        let mut tufts = Vec::with_capacity(count);
        for _ in 0..count {
            tufts.push(Tuft {
                offset: Vector2 {
                    x: rng.f32() * 40.0 - 20.0,
                    y: rng.f32() * 20.0 - 10.0,
                },
                radius: 10.0 + rng.f32() * 10.0,
                color: Color::new(30, 80 + (rng.f32() * 50.0) as u8, 40, 255),
            });
        }
        Self {
            kind: PlantKind::Shrub { tufts },
        }
    }
}
