//! Smoothed yaw facing.
//!
//! The [`Heading`] component stores the angle an entity is rendered at. The
//! heading system eases it toward the direction of motion along the shortest
//! arc, so the avatar banks into turns instead of snapping.

use bevy_ecs::prelude::Component;

/// Yaw facing in degrees, eased toward the motion direction.
///
/// A yaw of 0° faces +Z; angles increase toward +X, matching
/// `atan2(vx, vz)`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Heading {
    /// Current yaw in degrees, kept in [-180, 180).
    pub yaw_degrees: f32,
    /// Easing rate per second toward the target yaw.
    pub turn_rate: f32,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            yaw_degrees: 0.0,
            turn_rate: 6.0,
        }
    }
}
