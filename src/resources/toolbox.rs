//! Garden tool selection resource.
//!
//! Tracks which tool the next mouse press uses, the insertion counter for
//! garden pieces, and the throttle timestamp for brush sounds (dragging emits
//! a sample at most every 0.2 s for the rake, 0.3 s for water).

use bevy_ecs::prelude::Resource;
use raylib::consts::MouseCursor;

/// The garden tools, bound to keys 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Rake,
    Rock,
    Plant,
    Water,
}

impl Tool {
    /// OS cursor shape shown while this tool is selected.
    pub fn cursor(self) -> MouseCursor {
        match self {
            Tool::Rake | Tool::Water => MouseCursor::MOUSE_CURSOR_CROSSHAIR,
            Tool::Rock | Tool::Plant => MouseCursor::MOUSE_CURSOR_POINTING_HAND,
        }
    }

    /// Sound effect id played when this tool acts.
    pub fn sound(self) -> &'static str {
        match self {
            Tool::Rake => "rake",
            Tool::Rock => "rock",
            Tool::Plant => "plant",
            Tool::Water => "water",
        }
    }

    /// Minimum seconds between brush sounds while dragging.
    pub fn sound_throttle(self) -> f32 {
        match self {
            Tool::Water => 0.3,
            _ => 0.2,
        }
    }
}

/// Active garden tool plus brush bookkeeping.
#[derive(Resource, Debug, Clone)]
pub struct ToolBox {
    pub current: Tool,
    /// Insertion sequence handed to the next garden piece.
    pub next_order: u32,
    /// `WorldTime::elapsed` of the last brush sound.
    pub last_brush_sound: f32,
}

impl Default for ToolBox {
    fn default() -> Self {
        Self {
            current: Tool::Rake,
            next_order: 0,
            last_brush_sound: f32::NEG_INFINITY,
        }
    }
}

impl ToolBox {
    /// Hand out the next insertion sequence number.
    pub fn claim_order(&mut self) -> u32 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_rake() {
        let toolbox = ToolBox::default();
        assert_eq!(toolbox.current, Tool::Rake);
        assert_eq!(toolbox.next_order, 0);
    }

    #[test]
    fn test_claim_order_increments() {
        let mut toolbox = ToolBox::default();
        assert_eq!(toolbox.claim_order(), 0);
        assert_eq!(toolbox.claim_order(), 1);
        assert_eq!(toolbox.claim_order(), 2);
    }

    #[test]
    fn test_water_throttle_is_longer() {
        assert!(Tool::Water.sound_throttle() > Tool::Rake.sound_throttle());
    }

    #[test]
    fn test_tool_sounds() {
        assert_eq!(Tool::Rake.sound(), "rake");
        assert_eq!(Tool::Rock.sound(), "rock");
        assert_eq!(Tool::Plant.sound(), "plant");
        assert_eq!(Tool::Water.sound(), "water");
    }
}
