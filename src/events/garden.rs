//! Clear-the-garden event and observer.
//!
//! The garden's only deletion path: every placed piece is despawned in one
//! shot and the clear sound plays. Triggered by the C key.

use crate::components::gardenpiece::GardenPiece;
use crate::events::audio::AudioCmd;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::audio::queue_fx;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event that wipes the garden. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct ClearGardenEvent {}

/// Observer that despawns every [`GardenPiece`] and plays the clear sound.
pub fn clear_garden_observer(
    _trigger: On<ClearGardenEvent>,
    pieces: Query<Entity, With<GardenPiece>>,
    mut commands: Commands,
    mut signals: ResMut<WorldSignals>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let mut count = 0usize;
    for entity in pieces.iter() {
        commands.entity(entity).try_despawn();
        count += 1;
    }
    info!("garden cleared ({} pieces)", count);
    queue_fx(&mut audio, &mut signals, "clear");
}
