//! Locomotion systems.
//!
//! - [`player_locomotion`] moves input-driven entities along X by the
//!   horizontal axis level times their effective speed.
//! - [`motion_system`] advances every [`MotionState`] by one Euler step.
//!
//! Both are frame-rate independent: displacement scales with
//! [`WorldTime::delta`](crate::resources::worldtime::WorldTime).
use bevy_ecs::prelude::*;
use bevy_math::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::motionstate::MotionState;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::statblock::StatBlock;
use crate::events::spawn::ImpulseRequest;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Translate each player by `(axis, 0) * move_speed * dt`.
pub fn player_locomotion(
    mut query: Query<(&mut MapPosition, &StatBlock), With<PlayerControlled>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    let axis = input.horizontal();
    if axis == 0.0 {
        return;
    }
    for (mut position, stats) in query.iter_mut() {
        position.translate(Vec2::new(axis, 0.0) * stats.move_speed() * time.delta);
    }
}

/// Advance each entity with a `MotionState` by `direction * speed * dt`.
pub fn motion_system(mut query: Query<(&mut MapPosition, &MotionState)>, time: Res<WorldTime>) {
    for (mut position, motion) in query.iter_mut() {
        motion.advance(&mut position.pos, time.delta);
    }
}

/// Hand a one-shot impulse to the physics collaborator.
///
/// The velocity change happens when
/// [`apply_impulses`](crate::systems::movement::apply_impulses) drains the
/// request, not here.
pub fn apply_impulse(writer: &mut MessageWriter<ImpulseRequest>, entity: Entity, impulse: Vec2) {
    writer.write(ImpulseRequest { entity, impulse });
}
