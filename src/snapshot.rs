//! Serializable summary of the simulation state.
//!
//! [`WorldSnapshot::capture`] walks every tagged entity and records what a
//! caller usually wants to check after a run: where things are, how fast
//! they move and how many spawns a zone has left. The binary prints it as
//! JSON with `--json`.

use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::mapposition::MapPosition;
use crate::components::motionstate::MotionState;
use crate::components::spawner::BoundedSpawner;
use crate::components::statblock::StatBlock;
use crate::components::tag::Tag;
use crate::resources::worldtime::WorldTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// `Entity::to_bits` of the entity.
    pub id: u64,
    pub tag: Tag,
    pub position: Vec2,
    /// Signed speed of a constant-speed mover.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub motion_speed: Option<f32>,
    /// Effective speed of an entity with movement stats, sprint included.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub move_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spawns_remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    /// Sorted by tag, then id.
    pub entities: Vec<EntitySnapshot>,
}

impl WorldSnapshot {
    pub fn capture(world: &mut World) -> Self {
        let (frame, elapsed) = world
            .get_resource::<WorldTime>()
            .map(|time| (time.frame_count, time.elapsed))
            .unwrap_or_default();

        let mut query = world.query::<(
            Entity,
            &Tag,
            &MapPosition,
            Option<&MotionState>,
            Option<&StatBlock>,
            Option<&BoundedSpawner>,
        )>();
        let mut entities: Vec<EntitySnapshot> = query
            .iter(world)
            .map(|(entity, tag, position, motion, stats, spawner)| EntitySnapshot {
                id: entity.to_bits(),
                tag: *tag,
                position: position.pos,
                motion_speed: motion.map(|m| m.speed),
                move_speed: stats.map(StatBlock::move_speed),
                spawns_remaining: spawner.map(BoundedSpawner::remaining),
            })
            .collect();
        entities.sort_by(|a, b| a.tag.cmp(&b.tag).then(a.id.cmp(&b.id)));

        Self {
            frame,
            elapsed,
            entities,
        }
    }

    pub fn with_tag(&self, tag: Tag) -> impl Iterator<Item = &EntitySnapshot> {
        self.entities.iter().filter(move |e| e.tag == tag)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize snapshot: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_lists_tagged_entities_only() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.spawn((Tag::Enemy, MapPosition::new(1.0, 0.0), MotionState::horizontal(3.0)));
        world.spawn((
            Tag::Player,
            MapPosition::new(0.0, 0.0),
            StatBlock::new(5.0, 5.0, 5.0),
        ));
        world.spawn(MapPosition::new(9.0, 9.0));

        let snapshot = WorldSnapshot::capture(&mut world);
        assert_eq!(snapshot.entities.len(), 2);
        assert_eq!(snapshot.entities[0].tag, Tag::Player);
        assert_eq!(snapshot.entities[0].move_speed, Some(5.0));
        assert_eq!(snapshot.entities[0].motion_speed, None);
        assert_eq!(snapshot.entities[1].tag, Tag::Enemy);
        assert_eq!(snapshot.entities[1].motion_speed, Some(3.0));
    }

    #[test]
    fn json_omits_missing_fields() {
        let mut world = World::new();
        world.spawn((Tag::Pickup, MapPosition::new(2.0, 0.0)));
        let snapshot = WorldSnapshot::capture(&mut world);
        let json = snapshot.to_json().expect("snapshot serializes");
        assert!(json.contains("\"Pickup\""));
        assert!(!json.contains("motion_speed"));
        let back: WorldSnapshot = serde_json::from_str(&json).expect("snapshot parses");
        assert_eq!(back, snapshot);
    }
}
