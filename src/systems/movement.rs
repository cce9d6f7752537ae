//! Physics collaborator stand-in.
//!
//! - [`apply_impulses`] drains [`ImpulseRequest`] messages into
//!   [`RigidBody`] velocities.
//! - [`integrate_bodies`] applies gravity, moves bodies by their velocity and
//!   keeps them above the floor plane.
//!
//! There is no collision response. Contacts are only *reported* by
//! [`collision_detector`](crate::systems::collision::collision_detector).
use bevy_ecs::prelude::*;
use log::warn;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::spawn::ImpulseRequest;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Apply pending impulses. Targets without a `RigidBody` are skipped.
pub fn apply_impulses(
    mut reader: MessageReader<ImpulseRequest>,
    mut bodies: Query<&mut RigidBody>,
) {
    for request in reader.read() {
        let Ok(mut body) = bodies.get_mut(request.entity) else {
            warn!(
                "Impulse for {:?} ignored: no rigid body attached",
                request.entity
            );
            continue;
        };
        body.apply_impulse(request.impulse);
    }
}

/// Integrate gravity and velocity, then clamp to the floor.
pub fn integrate_bodies(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let dt = time.delta;
    let gravity = config.gravity();
    let floor_y = config.physics.floor_y;
    for (mut position, mut body) in query.iter_mut() {
        if body.frozen {
            continue;
        }
        let scale = body.gravity_scale;
        body.velocity += gravity * scale * dt;
        position.pos += body.velocity * dt;

        if position.pos.y < floor_y {
            position.pos.y = floor_y;
            if body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
            }
        }
    }
}
