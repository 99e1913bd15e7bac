//! ECS components for entities.
//!
//! One component type per file. The flyer toy uses the 3D position, rigid
//! body, avatar, heading, and prop components; the garden toy uses the 2D
//! position plus the garden piece family (rock, plant, strokes).
//!
//! Submodules overview:
//! - [`avatar`] – player tuning values and airborne state
//! - [`gardenpiece`] – tag + draw order for objects placed in the garden
//! - [`heading`] – smoothed yaw facing for the avatar
//! - [`mapposition`] – 2D world-space position
//! - [`plant`] – tree/bamboo/shrub with pre-rolled parameters
//! - [`prop`] – decorative colored block in the flyer scene
//! - [`rigidbody`] – velocity carrier integrated by the movement system
//! - [`rock`] – pre-rolled irregular polygon rock
//! - [`spaceposition`] – 3D world-space position
//! - [`stroke`] – rake stroke polyline with pre-rolled sand grains
//! - [`watercourse`] – river polyline with animated drops

pub mod avatar;
pub mod gardenpiece;
pub mod heading;
pub mod mapposition;
pub mod plant;
pub mod prop;
pub mod rigidbody;
pub mod rock;
pub mod spaceposition;
pub mod stroke;
pub mod watercourse;
