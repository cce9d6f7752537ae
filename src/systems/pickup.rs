//! Pickup consumption.
//!
//! When a [`Pickup`] touches a `Tag::Player` entity, the player's
//! [`StatBlock`] is upgraded by the pickup's boost and the pickup asks to be
//! destroyed. Destruction happens later in the tick, so a duplicate contact
//! delivered before then upgrades the player again.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::pickup::Pickup;
use crate::components::statblock::StatBlock;
use crate::events::collision::CollisionEvent;
use crate::events::spawn::DestroyRequest;

pub fn pickup_observer(
    trigger: On<CollisionEvent>,
    pickups: Query<&Pickup>,
    mut stats: Query<&mut StatBlock>,
    mut destroy: MessageWriter<DestroyRequest>,
) {
    let event = trigger.event();
    let Ok(pickup) = pickups.get(event.entity) else {
        return;
    };
    if !event.other_tag.is_player() {
        return;
    }
    let Ok(mut player_stats) = stats.get_mut(event.other) else {
        warn!(
            "Pickup {:?} touched player {:?} without a stat block; ignored",
            event.entity, event.other
        );
        return;
    };

    player_stats.upgrade(pickup.boost_amount);
    info!(
        "Player {:?} picked up +{} speed (base now {})",
        event.other, pickup.boost_amount, player_stats.base_speed
    );
    destroy.write(DestroyRequest {
        entity: event.entity,
    });
}
