//! Named entity templates used by spawn requests.
//!
//! A [`Prefab`] lists the components an instance starts with. The
//! [`PrefabStore`] resource maps prefab ids to templates and is the only
//! place [`SpawnRequest`](crate::events::spawn::SpawnRequest)s are resolved.
//!
//! # Usage
//!
//! ```ignore
//! let mut prefabs = PrefabStore::new();
//! prefabs.insert(
//!     "enemy",
//!     Prefab::new(Tag::Enemy)
//!         .with_collider(BoxCollider::new(1.0, 1.0))
//!         .with_motion(MotionState::horizontal(3.0))
//!         .bouncing(),
//! );
//! ```

use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use rustc_hash::FxHashMap;

use crate::components::bounce::BounceOnContact;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::motionstate::MotionState;
use crate::components::pickup::Pickup;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::tag::Tag;

/// Template for a spawned entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefab {
    pub tag: Tag,
    pub collider: Option<BoxCollider>,
    pub motion: Option<MotionState>,
    pub bounce: bool,
    pub pickup: Option<Pickup>,
    pub body: Option<RigidBody>,
}

impl Prefab {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            collider: None,
            motion: None,
            bounce: false,
            pickup: None,
            body: None,
        }
    }

    pub fn with_collider(mut self, collider: BoxCollider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_motion(mut self, motion: MotionState) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn bouncing(mut self) -> Self {
        self.bounce = true;
        self
    }

    pub fn with_pickup(mut self, pickup: Pickup) -> Self {
        self.pickup = Some(pickup);
        self
    }

    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Queue the spawn of one instance and return its id.
    pub fn spawn(&self, commands: &mut Commands, position: Vec2, rotation: Rotation) -> Entity {
        let mut entity = commands.spawn((self.tag, MapPosition::from_vec(position), rotation));
        if let Some(collider) = self.collider {
            entity.insert(collider);
        }
        if let Some(motion) = self.motion {
            entity.insert(motion);
        }
        if self.bounce {
            entity.insert(BounceOnContact);
        }
        if let Some(pickup) = self.pickup {
            entity.insert(pickup);
        }
        if let Some(body) = self.body {
            entity.insert(body);
        }
        entity.id()
    }
}

/// Resource mapping prefab ids to templates.
#[derive(Resource, Debug, Clone, Default)]
pub struct PrefabStore {
    prefabs: FxHashMap<String, Prefab>,
}

impl PrefabStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a prefab.
    pub fn insert(&mut self, id: impl Into<String>, prefab: Prefab) {
        self.prefabs.insert(id.into(), prefab);
    }

    pub fn get(&self, id: &str) -> Option<&Prefab> {
        self.prefabs.get(id)
    }

    /// Spawn an instance of `id`. Returns `None` for unknown prefabs.
    pub fn instantiate(
        &self,
        commands: &mut Commands,
        id: &str,
        position: Vec2,
        rotation: Rotation,
    ) -> Option<Entity> {
        self.get(id)
            .map(|prefab| prefab.spawn(commands, position, rotation))
    }
}
