//! Smoothed third-person camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`] so systems agree on a single
//! view transform. The camera system eases the position toward the avatar
//! plus `offset` and aims at the avatar plus `look_offset`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// ECS resource holding the active chase camera.
#[derive(Resource, Clone, Copy)]
pub struct FollowCamera {
    pub camera: Camera3D,
    /// Resting position relative to the followed entity.
    pub offset: Vector3,
    /// Aim point relative to the followed entity.
    pub look_offset: Vector3,
    /// Easing rate per second toward the resting position.
    pub stiffness: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        let offset = Vector3 {
            x: 0.0,
            y: 2.0,
            z: 5.0,
        };
        Self {
            camera: Camera3D::perspective(
                offset,
                Vector3 {
                    x: 0.0,
                    y: 0.0,
                    z: 0.0,
                },
                Vector3 {
                    x: 0.0,
                    y: 1.0,
                    z: 0.0,
                },
                75.0,
            ),
            offset,
            look_offset: Vector3 {
                x: 0.0,
                y: 0.5,
                z: 0.0,
            },
            stiffness: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_offset() {
        let cam = FollowCamera::default();
        assert_eq!(cam.camera.position.y, cam.offset.y);
        assert_eq!(cam.camera.position.z, cam.offset.z);
        assert!(cam.stiffness > 0.0);
    }
}
