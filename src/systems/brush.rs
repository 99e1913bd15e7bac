//! Garden brush system.
//!
//! Turns the per-frame mouse snapshot into garden pieces:
//! - press with a stroke tool (rake/water) starts a new stroke entity marked
//!   [`ActiveStroke`]; dragging appends cursor samples to it; release ends
//!   the stroke.
//! - press with a stamp tool (rock/plant) spawns one generated piece at the
//!   cursor and plays its sound.
//!
//! Brush sounds while dragging are throttled through
//! [`ToolBox::last_brush_sound`] so a fast drag does not machine-gun the
//! sample.

use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::components::gardenpiece::GardenPiece;
use crate::components::mapposition::MapPosition;
use crate::components::plant::Plant;
use crate::components::rock::Rock;
use crate::components::stroke::{ActiveStroke, RakeStroke};
use crate::components::watercourse::WaterCourse;
use crate::events::audio::AudioCmd;
use crate::resources::mouse::MouseState;
use crate::resources::toolbox::{Tool, ToolBox};
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::queue_fx;

/// Apply mouse input to the garden with the active tool.
#[allow(clippy::too_many_arguments)]
pub fn garden_brush(
    mouse: Res<MouseState>,
    mut toolbox: ResMut<ToolBox>,
    time: Res<WorldTime>,
    mut signals: ResMut<WorldSignals>,
    mut audio: MessageWriter<AudioCmd>,
    mut active: Query<
        (Entity, Option<&mut RakeStroke>, Option<&mut WaterCourse>),
        With<ActiveStroke>,
    >,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    if mouse.left.just_pressed {
        let at = mouse.position;
        match toolbox.current {
            Tool::Rake => {
                let order = toolbox.claim_order();
                commands.spawn((
                    GardenPiece { order },
                    RakeStroke::begin(at, &mut rng),
                    ActiveStroke,
                ));
            }
            Tool::Water => {
                let order = toolbox.claim_order();
                commands.spawn((GardenPiece { order }, WaterCourse::begin(at), ActiveStroke));
            }
            Tool::Rock => {
                let order = toolbox.claim_order();
                commands.spawn((
                    GardenPiece { order },
                    MapPosition::new(at.x, at.y),
                    Rock::generate(&mut rng),
                ));
                queue_fx(&mut audio, &mut signals, Tool::Rock.sound());
            }
            Tool::Plant => {
                let order = toolbox.claim_order();
                commands.spawn((
                    GardenPiece { order },
                    MapPosition::new(at.x, at.y),
                    Plant::generate(&mut rng),
                ));
                queue_fx(&mut audio, &mut signals, Tool::Plant.sound());
            }
        }
        return;
    }

    if mouse.left.active && mouse.moved() {
        let at = mouse.position;
        let mut extended = false;
        for (_, rake, course) in active.iter_mut() {
            if let Some(mut rake) = rake {
                rake.append(at, &mut rng);
                extended = true;
            } else if let Some(mut course) = course {
                course.points.push(at);
                extended = true;
            }
        }
        if extended {
            let throttle = toolbox.current.sound_throttle();
            if time.elapsed - toolbox.last_brush_sound > throttle {
                toolbox.last_brush_sound = time.elapsed;
                queue_fx(&mut audio, &mut signals, toolbox.current.sound());
            }
        }
        return;
    }

    if mouse.left.just_released {
        for (entity, _, _) in active.iter_mut() {
            commands.entity(entity).remove::<ActiveStroke>();
        }
    }
}
