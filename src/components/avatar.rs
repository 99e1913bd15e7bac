//! Player avatar component.
//!
//! Carries the tuning values the avatar controller applies each frame and the
//! airborne flag that gates jumping. All values are in world units per second
//! (or per second squared for `gravity`), integrated with the frame delta.

use bevy_ecs::prelude::Component;

/// Tuning and state for the user-controlled avatar.
///
/// # Fields
/// - `run_speed` - Horizontal speed while a direction is held
/// - `drift_damping` - Horizontal velocity decay per second when no direction is held
/// - `jump_speed` - Upward velocity applied on jump
/// - `gravity` - Downward acceleration, always applied
/// - `max_fall_speed` - Clamp on downward velocity
/// - `airborne` - True between jump and landing; blocks double jumps
#[derive(Component, Clone, Copy, Debug)]
pub struct Avatar {
    pub run_speed: f32,
    pub drift_damping: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub airborne: bool,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            run_speed: 18.0,
            drift_damping: 3.0,
            jump_speed: 48.0,
            gravity: 54.0,
            max_fall_speed: 120.0,
            airborne: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_default_is_grounded() {
        let avatar = Avatar::default();
        assert!(!avatar.airborne);
    }

    #[test]
    fn test_avatar_default_tuning_is_positive() {
        let avatar = Avatar::default();
        assert!(avatar.run_speed > 0.0);
        assert!(avatar.drift_damping > 0.0);
        assert!(avatar.jump_speed > 0.0);
        assert!(avatar.gravity > 0.0);
        assert!(avatar.max_fall_speed > 0.0);
    }
}
