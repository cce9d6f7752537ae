//! Consumable speed boost.
//!
//! When a `Tag::Player` entity touches a [`Pickup`], the player's
//! [`StatBlock`](super::statblock::StatBlock) is upgraded by `boost_amount`
//! and the pickup requests its own destruction. See
//! [`pickup_observer`](crate::systems::pickup::pickup_observer).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Pickup {
    /// Permanent speed increase granted to the player.
    pub boost_amount: f32,
}

impl Pickup {
    pub fn new(boost_amount: f32) -> Self {
        Self { boost_amount }
    }
}
