//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and read or mutated by systems:
//! input snapshots, timing, configuration, the chase camera, and the audio
//! bridge. Each submodule documents the semantics of its resource(s).
//!
//! Overview
//! - `arena` – ground level and square boundary of the flyer scene
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the debug overlay
//! - `followcam` – smoothed third-person camera for the flyer
//! - `gameconfig` – INI-backed settings with safe defaults
//! - `input` – per-frame keyboard state of the keys the toys care about
//! - `mouse` – cursor position, per-frame delta, and left-button state
//! - `toolbox` – active garden tool and brush-sound throttle
//! - `windowsize` – live window dimensions, refreshed every frame
//! - `worldsignals` – global flags for cross-system communication
//! - `worldtime` – simulation time and delta

pub mod arena;
pub mod audio;
pub mod debugmode;
pub mod followcam;
pub mod gameconfig;
pub mod input;
pub mod mouse;
pub mod toolbox;
pub mod windowsize;
pub mod worldsignals;
pub mod worldtime;
