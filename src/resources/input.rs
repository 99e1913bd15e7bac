//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the toys care about and exposes it
//! to systems via the [`InputState`] resource. Movement accepts both WASD and
//! the arrow keys; the number row drives garden tool selection.

use bevy_ecs::prelude::Resource;
use raylib::prelude::KeyboardKey;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    /// An inactive state bound to the given key.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Overwrite the per-frame flags from fresh hardware polls.
    pub fn refresh(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to the toys.
///
/// Grouped by purpose: main movement (WASD), secondary movement (arrows),
/// the jump/back/debug actions, and garden shortcuts (tools, clear,
/// save/load).
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    // Actions
    pub jump: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    // Garden shortcuts
    pub tool_rake: BoolState,
    pub tool_rock: BoolState,
    pub tool_plant: BoolState,
    pub tool_water: BoolState,
    pub garden_clear: BoolState,
    pub garden_save: BoolState,
    pub garden_load: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            tool_rake: BoolState::bound(KeyboardKey::KEY_ONE),
            tool_rock: BoolState::bound(KeyboardKey::KEY_TWO),
            tool_plant: BoolState::bound(KeyboardKey::KEY_THREE),
            tool_water: BoolState::bound(KeyboardKey::KEY_FOUR),
            garden_clear: BoolState::bound(KeyboardKey::KEY_C),
            garden_save: BoolState::bound(KeyboardKey::KEY_F5),
            garden_load: BoolState::bound(KeyboardKey::KEY_F9),
        }
    }
}
