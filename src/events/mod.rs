//! Event types and observers.
//!
//! Domain events exchanged across systems and the observers that react to
//! them. Events keep systems decoupled: the brush system queues audio
//! commands without knowing about the audio thread, and keyboard handlers
//! trigger garden clearing without touching the entity list themselves.
//!
//! Submodules:
//! - [`audio`] – commands and responses for the background audio thread
//! - [`garden`] – clear-the-garden event and its observer
//! - [`switchdebug`] – toggle the debug overlay on/off

pub mod audio;
pub mod garden;
pub mod switchdebug;
