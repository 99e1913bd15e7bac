//! Per-frame mouse input resource.
//!
//! The garden toy is driven entirely by this snapshot: cursor position,
//! per-frame delta, and left-button state, refreshed from raylib once per
//! frame so brush systems stay testable without a window.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Button state without a key binding (buttons are polled directly).
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl ButtonState {
    /// Overwrite the per-frame flags from fresh hardware polls.
    pub fn refresh(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

/// Resource capturing the per-frame mouse state.
#[derive(Resource, Debug, Clone)]
pub struct MouseState {
    /// Cursor position in window coordinates.
    pub position: Vector2,
    /// Cursor movement since the previous frame.
    pub delta: Vector2,
    pub left: ButtonState,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            delta: Vector2 { x: 0.0, y: 0.0 },
            left: ButtonState::default(),
        }
    }
}

impl MouseState {
    /// True when the cursor moved this frame.
    pub fn moved(&self) -> bool {
        self.delta.x != 0.0 || self.delta.y != 0.0
    }
}
