//! Input polling systems.
//!
//! - [`update_input_state`] reads hardware keyboard state from raylib each
//!   frame and writes the results into
//!   [`crate::resources::input::InputState`].
//! - [`quit_on_back`] raises the `quit_game` flag when Escape is pressed;
//!   the main loop checks the flag and exits.
//!
//! Everything downstream reads only the resources, so game logic ticks in
//! tests without a window.

use bevy_ecs::prelude::*;
use raylib::prelude::RaylibHandle;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};
use crate::resources::worldsignals::WorldSignals;

/// Poll raylib for keyboard input and update the `InputState` resource.
///
/// Also triggers [`SwitchDebugEvent`] when the debug key is pressed.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    let mut refresh = |state: &mut BoolState| {
        let key = state.key_binding;
        state.refresh(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    };

    refresh(&mut input.maindirection_up);
    refresh(&mut input.maindirection_left);
    refresh(&mut input.maindirection_down);
    refresh(&mut input.maindirection_right);
    refresh(&mut input.secondarydirection_up);
    refresh(&mut input.secondarydirection_down);
    refresh(&mut input.secondarydirection_left);
    refresh(&mut input.secondarydirection_right);
    refresh(&mut input.jump);
    refresh(&mut input.action_back);
    refresh(&mut input.mode_debug);
    refresh(&mut input.tool_rake);
    refresh(&mut input.tool_rock);
    refresh(&mut input.tool_plant);
    refresh(&mut input.tool_water);
    refresh(&mut input.garden_clear);
    refresh(&mut input.garden_save);
    refresh(&mut input.garden_load);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

/// Raise the quit flag on Escape. The main loop exits when it is set.
pub fn quit_on_back(input: Res<InputState>, mut signals: ResMut<WorldSignals>) {
    if input.action_back.just_pressed {
        signals.set_flag("quit_game");
    }
}
