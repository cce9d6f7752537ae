//! Overlapping collider pairs from the previous tick.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! compares the current overlaps against [`ActiveContacts`] so that each
//! contact is reported once, when it begins.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Unordered entity pair, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactPair(Entity, Entity);

impl ContactPair {
    pub fn new(a: Entity, b: Entity) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn entities(&self) -> (Entity, Entity) {
        (self.0, self.1)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveContacts {
    pairs: FxHashSet<ContactPair>,
}

impl ActiveContacts {
    pub fn contains(&self, pair: &ContactPair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Replace the stored overlaps with `current`.
    pub fn replace(&mut self, current: FxHashSet<ContactPair>) {
        self.pairs = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_unordered() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        assert_eq!(ContactPair::new(a, b), ContactPair::new(b, a));
        assert!(ContactPair::new(b, a).entities() == (a, b));
    }

    #[test]
    fn replace_swaps_the_set() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();

        let mut contacts = ActiveContacts::default();
        let mut first = FxHashSet::default();
        first.insert(ContactPair::new(a, b));
        contacts.replace(first);
        assert!(contacts.contains(&ContactPair::new(b, a)));

        let mut second = FxHashSet::default();
        second.insert(ContactPair::new(a, c));
        contacts.replace(second);
        assert!(!contacts.contains(&ContactPair::new(a, b)));
        assert_eq!(contacts.len(), 1);
    }
}
