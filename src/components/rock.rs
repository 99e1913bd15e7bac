//! Procedurally generated rock.
//!
//! A rock is an irregular polygon rolled once at placement time: 5-9 vertices
//! spaced evenly around the center, each pushed out to 70-100% of the base
//! radius, shaded with two grays picked from a common base value. All
//! randomness is stored on the component so redraws are stable.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::{Color, Vector2};

/// Pre-rolled rock polygon, positioned by
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Debug)]
pub struct Rock {
    /// Polygon vertices relative to the rock center.
    pub outline: Vec<Vector2>,
    /// Base radius the vertices were rolled from.
    pub radius: f32,
    /// Fill shade.
    pub light: Color,
    /// Underside shade.
    pub dark: Color,
}

impl Rock {
    /// Roll a new rock shape.
    pub fn generate(rng: &mut Rng) -> Self {
        let radius = 15.0 + rng.f32() * 25.0;
        let sides = 5 + rng.usize(0..5);
        let mut outline = Vec::with_capacity(sides);
        for i in 0..sides {
            let angle = (i as f32 / sides as f32) * std::f32::consts::TAU;
            let r = radius * (0.7 + rng.f32() * 0.3);
            outline.push(Vector2 {
                x: angle.cos() * r,
                y: angle.sin() * r,
            });
        }
        let base_gray = 160.0 + rng.f32() * 20.0;
        let light = Color::new(
            (base_gray - 10.0) as u8,
            (base_gray - 10.0) as u8,
            (base_gray - 15.0) as u8,
            255,
        );
        let dark = Color::new(
            (base_gray - 30.0) as u8,
            (base_gray - 30.0) as u8,
            (base_gray - 35.0) as u8,
            255,
        );
        Self {
            outline,
            radius,
            light,
            dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_vertex_count_in_range() {
        for seed in 0..32 {
            let mut rng = Rng::with_seed(seed);
            let rock = Rock::generate(&mut rng);
            assert!(rock.outline.len() >= 5 && rock.outline.len() <= 9);
        }
    }

    #[test]
    fn test_generate_radius_in_range() {
        for seed in 0..32 {
            let mut rng = Rng::with_seed(seed);
            let rock = Rock::generate(&mut rng);
            assert!(rock.radius >= 15.0 && rock.radius <= 40.0);
        }
    }

    #[test]
    fn test_generate_vertices_within_jitter_band() {
        for seed in 0..32 {
            let mut rng = Rng::with_seed(seed);
            let rock = Rock::generate(&mut rng);
            for v in &rock.outline {
                let r = (v.x * v.x + v.y * v.y).sqrt();
                assert!(r >= rock.radius * 0.7 - 1e-3);
                assert!(r <= rock.radius + 1e-3);
            }
        }
    }

    #[test]
    fn test_generate_dark_is_darker_than_light() {
        let mut rng = Rng::with_seed(7);
        let rock = Rock::generate(&mut rng);
        assert!(rock.dark.r < rock.light.r);
        assert!(rock.dark.g < rock.light.g);
        assert!(rock.dark.b < rock.light.b);
    }
}
