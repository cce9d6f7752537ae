//! Contact detection.
//!
//! [`collision_detector`] tests every pair of entities with a
//! [`BoxCollider`] and compares the overlapping set with the previous tick's
//! [`ActiveContacts`]. Only pairs that *started* overlapping this tick are
//! reported:
//!
//! - both colliders solid → a [`CollisionEvent`] for each participant
//! - at least one trigger → a [`TriggerEnterEvent`] for each participant
//!
//! Each event names the receiving entity, the other entity and the other
//! entity's [`Tag`] (`Tag::Untagged` if it has none). Despawned entities
//! simply stop appearing in the overlap set, so their contacts are dropped.
use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::tag::Tag;
use crate::events::collision::{CollisionEvent, TriggerEnterEvent};
use crate::resources::contacts::{ActiveContacts, ContactPair};

/// Find contacts that began this tick and trigger their events.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, Option<&Tag>)>,
    mut contacts: ResMut<ActiveContacts>,
    mut commands: Commands,
) {
    let mut current: FxHashSet<ContactPair> = FxHashSet::default();
    let mut began: SmallVec<[(ContactPair, bool); 8]> = SmallVec::new();

    for [
        (entity_a, position_a, collider_a, _),
        (entity_b, position_b, collider_b, _),
    ] in query.iter_combinations()
    {
        if !collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            continue;
        }
        let pair = ContactPair::new(entity_a, entity_b);
        if !contacts.contains(&pair) {
            began.push((pair, collider_a.is_trigger || collider_b.is_trigger));
        }
        current.insert(pair);
    }

    contacts.replace(current);

    let tag_of = |entity: Entity| {
        query
            .get(entity)
            .ok()
            .and_then(|(_, _, _, tag)| tag.copied())
            .unwrap_or_default()
    };

    for (pair, is_trigger) in began {
        let (a, b) = pair.entities();
        let (tag_a, tag_b) = (tag_of(a), tag_of(b));
        if is_trigger {
            debug!("Trigger entered: {:?} ({}) <-> {:?} ({})", a, tag_a, b, tag_b);
            commands.trigger(TriggerEnterEvent {
                entity: a,
                other: b,
                other_tag: tag_b,
            });
            commands.trigger(TriggerEnterEvent {
                entity: b,
                other: a,
                other_tag: tag_a,
            });
        } else {
            debug!("Contact began: {:?} ({}) <-> {:?} ({})", a, tag_a, b, tag_b);
            commands.trigger(CollisionEvent {
                entity: a,
                other: b,
                other_tag: tag_b,
            });
            commands.trigger(CollisionEvent {
                entity: b,
                other: a,
                other_tag: tag_a,
            });
        }
    }
}
