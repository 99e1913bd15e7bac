use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
///
/// Playback is fire-and-forget: a failed load or play is reported back (or
/// just logged) and otherwise ignored, so the toys run fine without any
/// sound files on disk.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    /// Load a streaming music track under an id.
    LoadMusic { id: String, path: String },
    /// Play a loaded track from the start, optionally looping.
    PlayMusic { id: String, looped: bool },
    /// Load a sound effect under an id.
    LoadFx { id: String, path: String },
    /// Play a loaded effect, restarting it if already playing.
    PlayFx { id: String },
    /// Unload everything and exit the audio thread.
    Shutdown,
}

/// Responses sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    /// A non-looping track reached its end.
    MusicFinished { id: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
