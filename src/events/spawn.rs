//! Requests sent from gameplay code to the host services.
//!
//! Gameplay never creates, destroys or pushes entities directly. It writes
//! one of these messages and the host side
//! ([`crate::systems::spawn`], [`crate::systems::movement`]) carries it out
//! later in the same tick. Requests are fire-and-forget.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;
use bevy_math::Vec2;

use crate::components::rotation::Rotation;

/// Instantiate `prefab` at `position` with `rotation`.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub prefab: String,
    pub position: Vec2,
    pub rotation: Rotation,
}

impl SpawnRequest {
    /// Spawn with the prefab's default orientation.
    pub fn at(prefab: impl Into<String>, position: Vec2) -> Self {
        Self {
            prefab: prefab.into(),
            position,
            rotation: Rotation::IDENTITY,
        }
    }
}

/// Remove `entity` from the world. Already-removed entities are ignored.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestroyRequest {
    pub entity: Entity,
}

/// One-shot velocity change handed to the physics collaborator.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ImpulseRequest {
    pub entity: Entity,
    pub impulse: Vec2,
}
