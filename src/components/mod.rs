//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation. Components hold per-entity data; behavior lives in
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`bounce`] – marker that reverses motion on every contact
//! - [`boxcollider`] – axis-aligned rectangular collider, solid or trigger
//! - [`mapposition`] – world-space position for an entity
//! - [`motionstate`] – signed speed along a unit facing
//! - [`pickup`] – consumable speed boost
//! - [`playercontrolled`] – marks the input-driven entity and its spawn action
//! - [`rigidbody`] – minimal dynamic body (velocity, mass, gravity)
//! - [`rotation`] – spawn orientation in degrees
//! - [`spawner`] – limited-use spawner fired by zone entry
//! - [`statblock`] – movement stats, upgrades and sprint toggle
//! - [`tag`] – category label compared by value

pub mod bounce;
pub mod boxcollider;
pub mod mapposition;
pub mod motionstate;
pub mod pickup;
pub mod playercontrolled;
pub mod rigidbody;
pub mod rotation;
pub mod spawner;
pub mod statblock;
pub mod tag;
