//! ECS systems.
//!
//! Systems that advance simulation, input, and rendering.
//!
//! Submodules overview
//! - [`audio`] – background audio thread and the bridge systems
//! - [`avatarcontroller`] – translate input into avatar velocity, jumps, gravity
//! - [`brush`] – mouse press/drag/release into garden pieces and strokes
//! - [`camera`] – ease the chase camera after the avatar
//! - [`confine`] – ground landing and arena fence after movement
//! - [`gardenfile`] – save/load the garden as JSON
//! - [`heading`] – ease yaw facing toward the motion direction
//! - [`input`] – poll the keyboard into [`crate::resources::input::InputState`]
//! - [`mouse`] – poll the mouse into [`crate::resources::mouse::MouseState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw the active toy and the debug overlay using raylib
//! - [`time`] – update simulation time and delta
//! - [`toolselect`] – garden tool keys, cursor shape, clear trigger
//! - [`waterflow`] – spawn and advance water drops along their courses

pub mod audio;
pub mod avatarcontroller;
pub mod brush;
pub mod camera;
pub mod confine;
pub mod gardenfile;
pub mod heading;
pub mod input;
pub mod mouse;
pub mod movement;
pub mod render;
pub mod time;
pub mod toolselect;
pub mod waterflow;
