//! Enemy bounce reaction.
//!
//! Every [`CollisionEvent`] delivered to an entity with [`BounceOnContact`]
//! negates its [`MotionState`] speed. The contact partner is not inspected
//! and repeated contacts are not debounced: two walls touched in the same
//! tick flip the entity twice, which leaves it heading the same way.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::bounce::BounceOnContact;
use crate::components::motionstate::MotionState;
use crate::events::collision::CollisionEvent;

pub fn bounce_observer(
    trigger: On<CollisionEvent>,
    mut movers: Query<&mut MotionState, With<BounceOnContact>>,
) {
    let event = trigger.event();
    let Ok(mut motion) = movers.get_mut(event.entity) else {
        return;
    };
    motion.reverse();
    debug!(
        "{:?} bounced off {:?} ({}), speed now {}",
        event.entity, event.other, event.other_tag, motion.speed
    );
}
