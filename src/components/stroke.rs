//! Rake strokes.
//!
//! A rake stroke is a polyline of cursor samples plus the sand grains drawn
//! around them. Grains are rolled once when their point is appended: 20 per
//! point, scattered up to ±10 px, 1-3 px across, with varying alpha for
//! texture. Storing them keeps the pattern stable across redraws and makes
//! strokes serializable.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::Vector2;

/// One sand grain of a rake stroke, in absolute canvas coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Grain {
    pub pos: Vector2,
    /// Square edge length in pixels.
    pub size: f32,
    pub alpha: u8,
}

/// A raked furrow: sampled points plus their pre-rolled grains.
#[derive(Component, Clone, Debug, Default)]
pub struct RakeStroke {
    pub points: Vec<Vector2>,
    pub grains: Vec<Grain>,
}

/// Marker for the stroke currently being dragged. Removed on mouse release.
#[derive(Component, Clone, Copy, Debug)]
pub struct ActiveStroke;

impl RakeStroke {
    pub const GRAINS_PER_POINT: usize = 20;
    const SCATTER: f32 = 20.0;

    /// Start a stroke at the press position.
    pub fn begin(at: Vector2, rng: &mut Rng) -> Self {
        let mut stroke = Self::default();
        stroke.append(at, rng);
        stroke
    }

    /// Append a drag sample and roll its grains.
    pub fn append(&mut self, at: Vector2, rng: &mut Rng) {
        self.points.push(at);
        for _ in 0..Self::GRAINS_PER_POINT {
            self.grains.push(Grain {
                pos: Vector2 {
                    x: at.x + (rng.f32() - 0.5) * Self::SCATTER,
                    y: at.y + (rng.f32() - 0.5) * Self::SCATTER,
                },
                size: 1.0 + rng.f32() * 2.0,
                alpha: ((0.3 + rng.f32() * 0.4) * 255.0) as u8,
            });
        }
    }
}
