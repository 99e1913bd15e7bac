//! Audio backed by a dedicated thread and raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the raylib audio
//!   device, and processes [`AudioCmd`] messages, emitting [`AudioMessage`]
//!   responses.
//! - [`forward_audio_cmds`] / [`poll_audio_messages`] move messages between
//!   the ECS mailboxes and the crossbeam channels each frame.
//!
//! raylib audio API calls stay isolated to the one thread; the main thread
//! communicates over lock-free channels. Every failure on the audio side is
//! logged and swallowed — missing sound files must never take a toy down.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::worldsignals::WorldSignals;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Queue a sound effect, starting the background music with the first one.
///
/// Mirrors the original toys: ambient music may not start until the user has
/// interacted, so the first effect latches it on. The latch lives in
/// [`WorldSignals`] under `music_started`.
pub fn queue_fx(writer: &mut MessageWriter<AudioCmd>, signals: &mut WorldSignals, id: &str) {
    if !signals.has_flag("music_started") {
        signals.set_flag("music_started");
        writer.write(AudioCmd::PlayMusic {
            id: "ambient".to_string(),
            looped: true,
        });
    }
    writer.write(AudioCmd::PlayFx { id: id.to_string() });
}

/// Drain pending responses from the audio thread into the ECS
/// `Messages<AudioMessage>` mailbox.
///
/// Non-blocking; runs each frame on the main thread. Does not mutate world
/// state beyond writing messages. A no-op when audio is disabled.
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread. A no-op when audio
/// is disabled.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    let Some(bridge) = bridge else {
        return;
    };
    for cmd in reader.read() {
        // Ignore send errors during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`] so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Entry point of the dedicated audio thread.
///
/// Owns all `Music` and `Sound` handles, reacts to [`AudioCmd`] inputs, and
/// emits [`AudioMessage`] outputs. Music streaming requires periodic
/// `update_stream()` calls; the loop pumps them while a track plays and
/// restarts looped tracks that reach their end.
///
/// Blocks until it receives [`AudioCmd::Shutdown`]. If the audio device
/// cannot be initialized the thread drains commands without acting on them,
/// so the rest of the toy keeps running silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            warn!("audio device unavailable, playing nothing: {}", e);
            // Keep draining so senders never block; exit on Shutdown.
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    return;
                }
            }
            return;
        }
    };

    info!("audio thread starting (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        info!("music loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        warn!("music load failed id='{}' path='{}': {}", id, path, e);
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_msg.send(AudioMessage::MusicPlayStarted { id });
                    } else {
                        warn!("music play skipped id='{}': not loaded", id);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        info!("fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        warn!("fx load failed id='{}' path='{}': {}", id, path, e);
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    // Sound::play restarts from the beginning if already playing,
                    // which is exactly the rewind-and-replay the brushes want.
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    } else {
                        warn!("fx play skipped id='{}': not loaded", id);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("audio shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    sounds.clear();
                    break 'run;
                }
            }
        }

        // 2) Pump streaming + detect ends.
        //    update_stream() must be called regularly while playing. If a
        //    track ended and isn't looped, emit Finished exactly once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                    let _ = tx_msg.send(AudioMessage::MusicPlayStarted { id: id.clone() });
                }
            } else {
                playing.remove(id);
                let _ = tx_msg.send(AudioMessage::MusicFinished { id: id.clone() });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!("audio thread exiting (id={:?})", std::thread::current().id());

    // On exit, musics and sounds drop before `audio`, satisfying lifetimes
}
