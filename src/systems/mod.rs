//! Simulation systems and observers.
//!
//! Systems run once per tick in the order set up by
//! [`crate::game::build_tick_schedule`]; observers run whenever the event
//! they listen to is triggered.
//!
//! Submodules overview
//! - [`bounce`] – reverse motion on contact (observer)
//! - [`collision`] – report contacts that began this tick
//! - [`input`] – turn recorded input edges into events, then clear them
//! - [`locomotion`] – player axis movement and constant-speed motion
//! - [`movement`] – impulses, gravity and floor for rigid bodies
//! - [`pickup`] – consume pickups on player contact (observer)
//! - [`player`] – jump, sprint and spawn-enemy actions (observer)
//! - [`spawn`] – carry out spawn/destroy requests, rotate message queues
//! - [`spawner`] – zone-entry spawner (observer)
//! - [`time`] – update simulation time and delta

pub mod bounce;
pub mod collision;
pub mod input;
pub mod locomotion;
pub mod movement;
pub mod pickup;
pub mod player;
pub mod spawn;
pub mod spawner;
pub mod time;
