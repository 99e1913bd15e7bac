//! Water courses.
//!
//! A water course is a polyline river with drops flowing along it. Drops are
//! spawned on a fixed cadence by the water flow system and advance by linear
//! interpolation between consecutive points, wrapping back to the first
//! segment at the end. A course needs at least two points before anything
//! flows.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// One drop flowing along a course.
#[derive(Clone, Copy, Debug)]
pub struct WaterDrop {
    /// Index of the segment the drop is on (between points i and i+1).
    pub segment: usize,
    /// Interpolation along the segment, in [0, 1).
    pub progress: f32,
    /// Segments traversed per second.
    pub speed: f32,
    pub radius: f32,
    pub alpha: u8,
}

/// River polyline plus its animated drops.
#[derive(Component, Clone, Debug)]
pub struct WaterCourse {
    pub points: Vec<Vector2>,
    pub drops: Vec<WaterDrop>,
    /// Time accumulated toward the next drop spawn.
    pub spawn_timer: f32,
}

impl WaterCourse {
    /// Start a course at the press position.
    pub fn begin(at: Vector2) -> Self {
        Self {
            points: vec![at],
            drops: Vec::new(),
            spawn_timer: 0.0,
        }
    }

    /// Number of traversable segments.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Interpolated position of a drop, or None if its segment fell off the
    /// polyline.
    pub fn drop_position(&self, drop: &WaterDrop) -> Option<Vector2> {
        let a = self.points.get(drop.segment)?;
        let b = self.points.get(drop.segment + 1)?;
        Some(Vector2 {
            x: a.x + (b.x - a.x) * drop.progress,
            y: a.y + (b.y - a.y) * drop.progress,
        })
    }
}
