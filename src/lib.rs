//! bouncerun library.
//!
//! This module exposes the simulation's ECS components, resources, systems,
//! and events for use in integration tests and by the headless runner.

pub mod autopilot;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod snapshot;
pub mod systems;
