//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide flag set for
//! cross-system communication without entity queries. The toys use it for
//! the `quit_game` flag (Escape) and the background-music latch.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

/// Global presence-only flags addressed by string keys; a key being present
/// means "true".
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
