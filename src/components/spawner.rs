//! Limited-use spawner fired by zone entry.
//!
//! A [`BoundedSpawner`] sits on a trigger-zone entity. Every time a
//! `Tag::Player` entity enters the zone, one prefab instance is requested at
//! the spawner's fixed spawn point and the budget goes down by one. When the
//! budget hits zero the spawner requests its own destruction.
//!
//! The spawn point is computed once, at construction, from the spawner's
//! position plus a vertical offset. Moving the zone afterwards does not move
//! where things appear.
//!
//! # Related
//!
//! - [`crate::systems::spawner::spawner_trigger_observer`] – reacts to entry events
//! - [`crate::events::spawn::SpawnRequest`] – what the spawner emits

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Default number of spawns a zone grants.
pub const DEFAULT_SPAWN_COUNT: u32 = 2;
/// Default height above the zone where spawns appear.
pub const DEFAULT_SPAWN_OFFSET_Y: f32 = 3.0;

/// Outcome of consuming one unit of the spawn budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Spawn granted; the spawner still has budget left.
    Spawned,
    /// Spawn granted and it was the last one.
    SpawnedLast,
    /// Nothing left to give.
    Exhausted,
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct BoundedSpawner {
    /// Prefab to instantiate. `None` turns every entry into a no-op.
    pub prefab: Option<String>,
    /// Fixed world position for every spawn from this spawner.
    spawn_position: Vec2,
    remaining: u32,
}

impl BoundedSpawner {
    /// Build a spawner located at `origin`, spawning `count` times at
    /// `origin + (0, offset_y)`.
    pub fn new(prefab: Option<String>, origin: Vec2, offset_y: f32, count: u32) -> Self {
        Self {
            prefab,
            spawn_position: origin + Vec2::new(0.0, offset_y),
            remaining: count,
        }
    }

    pub fn spawn_position(&self) -> Vec2 {
        self.spawn_position
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Spend one unit of budget if any is left.
    pub fn consume(&mut self) -> SpawnOutcome {
        match self.remaining {
            0 => SpawnOutcome::Exhausted,
            1 => {
                self.remaining = 0;
                SpawnOutcome::SpawnedLast
            }
            _ => {
                self.remaining -= 1;
                SpawnOutcome::Spawned
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_position_is_origin_plus_offset() {
        let spawner = BoundedSpawner::new(Some("boost".into()), Vec2::new(4.0, 1.0), 3.0, 2);
        assert_eq!(spawner.spawn_position(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn consume_counts_down_then_exhausts() {
        let mut spawner = BoundedSpawner::new(None, Vec2::ZERO, 3.0, 2);
        assert_eq!(spawner.remaining(), 2);
        assert_eq!(spawner.consume(), SpawnOutcome::Spawned);
        assert_eq!(spawner.remaining(), 1);
        assert_eq!(spawner.consume(), SpawnOutcome::SpawnedLast);
        assert_eq!(spawner.remaining(), 0);
        assert_eq!(spawner.consume(), SpawnOutcome::Exhausted);
        assert_eq!(spawner.remaining(), 0);
    }

    #[test]
    fn zero_budget_starts_exhausted() {
        let mut spawner = BoundedSpawner::new(None, Vec2::ZERO, 3.0, 0);
        assert_eq!(spawner.consume(), SpawnOutcome::Exhausted);
        assert_eq!(spawner.remaining(), 0);
    }

    #[test]
    fn single_use_spawner_is_last_immediately() {
        let mut spawner = BoundedSpawner::new(None, Vec2::ZERO, 3.0, 1);
        assert_eq!(spawner.consume(), SpawnOutcome::SpawnedLast);
    }
}
