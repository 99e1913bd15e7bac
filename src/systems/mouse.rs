//! Mouse polling system.
//!
//! Reads the cursor position and left-button state from raylib each frame
//! and writes them into [`crate::resources::mouse::MouseState`]. The delta
//! is derived from the previous frame's position so downstream systems can
//! tell drags from stationary holds.

use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, RaylibHandle, Vector2};

use crate::resources::mouse::MouseState;

/// Poll raylib for mouse input and update the `MouseState` resource.
pub fn update_mouse_state(mut mouse: ResMut<MouseState>, rl: NonSend<RaylibHandle>) {
    let pos = rl.get_mouse_position();
    mouse.delta = Vector2 {
        x: pos.x - mouse.position.x,
        y: pos.y - mouse.position.y,
    };
    mouse.position = pos;
    mouse.left.refresh(
        rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
    );
}
