//! Garden tool selection.
//!
//! - [`tool_select`] switches the active tool on the 1-4 keys and triggers
//!   [`ClearGardenEvent`](crate::events::garden::ClearGardenEvent) on C.
//! - [`apply_tool_cursor`] mirrors the selection into the OS cursor shape
//!   (crosshair for strokes, pointing hand for stamps). Split from
//!   `tool_select` so selection stays testable without a window.

use bevy_ecs::prelude::*;
use raylib::prelude::RaylibHandle;

use crate::events::garden::ClearGardenEvent;
use crate::resources::input::InputState;
use crate::resources::toolbox::{Tool, ToolBox};

/// Switch tools from the number keys; trigger clear-all on C.
pub fn tool_select(
    mut toolbox: ResMut<ToolBox>,
    input: Res<InputState>,
    mut commands: Commands,
) {
    let picked = if input.tool_rake.just_pressed {
        Some(Tool::Rake)
    } else if input.tool_rock.just_pressed {
        Some(Tool::Rock)
    } else if input.tool_plant.just_pressed {
        Some(Tool::Plant)
    } else if input.tool_water.just_pressed {
        Some(Tool::Water)
    } else {
        None
    };

    if let Some(tool) = picked {
        if tool != toolbox.current {
            toolbox.current = tool;
        }
    }

    if input.garden_clear.just_pressed {
        commands.trigger(ClearGardenEvent {});
    }
}

/// Update the OS cursor when the tool selection changed.
pub fn apply_tool_cursor(
    toolbox: Res<ToolBox>,
    mut applied: Local<Option<Tool>>,
    mut rl: NonSendMut<RaylibHandle>,
) {
    if *applied != Some(toolbox.current) {
        rl.set_mouse_cursor(toolbox.current.cursor());
        *applied = Some(toolbox.current);
    }
}
