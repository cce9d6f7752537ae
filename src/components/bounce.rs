//! Marker for entities that turn around on every contact.
//!
//! Entities carrying [`BounceOnContact`] and a
//! [`MotionState`](super::motionstate::MotionState) have their speed negated
//! by [`bounce_observer`](crate::systems::bounce::bounce_observer) each time a
//! [`CollisionEvent`](crate::events::collision::CollisionEvent) is delivered to
//! them. There is no tag filter and no debounce.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BounceOnContact;
