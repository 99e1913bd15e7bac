//! Courtyard library.
//!
//! Two small interactive toys sharing one ECS core:
//! - **flyer** – a third-person movement playground (run, jump, chase camera)
//! - **garden** – a zen garden drawing toy (rake, rocks, plants, water)
//!
//! This module exposes the components, resources, systems, events, and toy
//! scenes so integration tests can tick schedules without opening a window.

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod toys;
