//! Host-side processing of spawn and destroy requests.
//!
//! - [`apply_spawn_requests`] resolves each
//!   [`SpawnRequest`](crate::events::spawn::SpawnRequest) against the
//!   [`PrefabStore`] and spawns the instance.
//! - [`apply_destroy_requests`] despawns each requested entity.
//! - [`update_request_queues`] rotates the message buffers once per tick.
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::events::spawn::{DestroyRequest, ImpulseRequest, SpawnRequest};
use crate::resources::prefabstore::PrefabStore;

pub fn apply_spawn_requests(
    mut reader: MessageReader<SpawnRequest>,
    prefabs: Res<PrefabStore>,
    mut commands: Commands,
) {
    for request in reader.read() {
        match prefabs.instantiate(
            &mut commands,
            &request.prefab,
            request.position,
            request.rotation,
        ) {
            Some(entity) => debug!(
                "Spawned '{}' as {:?} at ({}, {})",
                request.prefab, entity, request.position.x, request.position.y
            ),
            None => warn!("Spawn of unknown prefab '{}' ignored", request.prefab),
        }
    }
}

pub fn apply_destroy_requests(mut reader: MessageReader<DestroyRequest>, mut commands: Commands) {
    for request in reader.read() {
        debug!("Destroying {:?}", request.entity);
        commands.entity(request.entity).try_despawn();
    }
}

/// Advance the request queues. Messages stay readable for one more tick.
pub fn update_request_queues(
    mut spawns: ResMut<Messages<SpawnRequest>>,
    mut destroys: ResMut<Messages<DestroyRequest>>,
    mut impulses: ResMut<Messages<ImpulseRequest>>,
) {
    spawns.update();
    destroys.update();
    impulses.update();
}
