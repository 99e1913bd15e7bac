//! Garden scene setup.
//!
//! Inserts the toolbox and mouse snapshot, registers the clear-all observer,
//! and queues the sound/music loads. The garden itself starts empty; pieces
//! appear as the user draws.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::events::garden::clear_garden_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::mouse::MouseState;
use crate::resources::toolbox::ToolBox;

/// Sound effect ids the garden plays, loaded from `<assets>/sounds/<id>.wav`.
pub const SOUND_EFFECTS: [&str; 5] = ["rock", "plant", "rake", "water", "clear"];

/// Insert garden resources, register observers, and queue asset loads.
pub fn setup(world: &mut World) {
    world.insert_resource(ToolBox::default());
    world.insert_resource(MouseState::default());

    world.spawn(Observer::new(clear_garden_observer));
    world.flush();

    let config = world.resource::<GameConfig>();
    if config.audio_enabled {
        let mut loads = vec![AudioCmd::LoadMusic {
            id: "ambient".to_string(),
            path: config.music_path(),
        }];
        for name in SOUND_EFFECTS {
            loads.push(AudioCmd::LoadFx {
                id: name.to_string(),
                path: config.sound_path(name),
            });
        }
        let mut messages = world.resource_mut::<Messages<AudioCmd>>();
        for cmd in loads {
            messages.write(cmd);
        }
    }
}
