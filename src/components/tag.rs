//! Category label attached to entities.
//!
//! Behaviors filter contacts by comparing the other participant's [`Tag`] by
//! value (e.g. pickups only react to `Tag::Player`). Entities without a
//! `Tag` component are reported as [`Tag::Untagged`].

use std::fmt;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(
    Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Tag {
    Player,
    Enemy,
    Pickup,
    TriggerZone,
    #[default]
    Untagged,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Player => "Player",
            Tag::Enemy => "Enemy",
            Tag::Pickup => "Pickup",
            Tag::TriggerZone => "TriggerZone",
            Tag::Untagged => "Untagged",
        }
    }

    pub fn is_player(&self) -> bool {
        *self == Tag::Player
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
