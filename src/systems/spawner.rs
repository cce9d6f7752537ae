//! Zone-entry spawner.
//!
//! When a `Tag::Player` entity enters a [`BoundedSpawner`]'s trigger zone:
//! 1. one [`SpawnRequest`] is written at the spawner's fixed spawn point
//! 2. the budget goes down by one
//! 3. if that was the last unit, a [`DestroyRequest`] for the spawner follows
//!
//! Exhausted spawners ignore entries. A spawner without a prefab ignores
//! entries too and keeps its budget.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::spawner::{BoundedSpawner, SpawnOutcome};
use crate::events::collision::TriggerEnterEvent;
use crate::events::spawn::{DestroyRequest, SpawnRequest};

pub fn spawner_trigger_observer(
    trigger: On<TriggerEnterEvent>,
    mut spawners: Query<&mut BoundedSpawner>,
    mut spawn: MessageWriter<SpawnRequest>,
    mut destroy: MessageWriter<DestroyRequest>,
) {
    let event = trigger.event();
    let Ok(mut spawner) = spawners.get_mut(event.entity) else {
        return;
    };
    if !event.other_tag.is_player() {
        return;
    }
    let Some(prefab) = spawner.prefab.clone() else {
        warn!("Spawner {:?} has no prefab configured; entry ignored", event.entity);
        return;
    };

    let outcome = spawner.consume();
    if outcome == SpawnOutcome::Exhausted {
        return;
    }

    let position = spawner.spawn_position();
    spawn.write(SpawnRequest::at(prefab, position));
    info!(
        "Spawner {:?} fired at ({}, {}), {} left",
        event.entity,
        position.x,
        position.y,
        spawner.remaining()
    );

    if outcome == SpawnOutcome::SpawnedLast {
        destroy.write(DestroyRequest {
            entity: event.entity,
        });
    }
}
