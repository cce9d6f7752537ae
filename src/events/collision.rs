//! Contact events emitted by the collision detector.
//!
//! The detector triggers one [`CollisionEvent`] per participant when two
//! solid colliders begin to overlap, and one [`TriggerEnterEvent`] per
//! participant when at least one of them is a trigger. Continuous overlap
//! and separation emit nothing.
//!
//! Observers filter on `entity` (the receiver) and inspect `other_tag` to
//! decide whether to react:
//! - [`bounce_observer`](crate::systems::bounce::bounce_observer) – any contact
//! - [`pickup_observer`](crate::systems::pickup::pickup_observer) – `Tag::Player` only
//! - [`spawner_trigger_observer`](crate::systems::spawner::spawner_trigger_observer) – `Tag::Player` only
use bevy_ecs::prelude::*;

use crate::components::tag::Tag;

/// Physical contact began between `entity` and `other`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// The entity receiving this notification.
    pub entity: Entity,
    /// The entity it touched.
    pub other: Entity,
    /// Tag of `other` at the time of contact.
    pub other_tag: Tag,
}

/// `other` entered the trigger bounds of `entity` (or the reverse).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TriggerEnterEvent {
    /// The entity receiving this notification.
    pub entity: Entity,
    /// The entity that entered or was entered.
    pub other: Entity,
    /// Tag of `other` at the time of entry.
    pub other_tag: Tag,
}
