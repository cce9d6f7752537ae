//! Player action handling.
//!
//! [`player_action_observer`] reacts to [`InputEvent`] edges for every
//! [`PlayerControlled`] entity:
//!
//! | Action       | Pressed                                 | Released      |
//! |--------------|-----------------------------------------|---------------|
//! | `Jump`       | upward impulse of `jump_force`          | –             |
//! | `Sprint`     | `StatBlock::start_sprint`               | `stop_sprint` |
//! | `SpawnEnemy` | spawn request at player + spawn offset  | –             |
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use log::{debug, warn};

use crate::components::mapposition::MapPosition;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::statblock::StatBlock;
use crate::events::input::{InputAction, InputEvent, InputPhase};
use crate::events::spawn::{ImpulseRequest, SpawnRequest};
use crate::systems::locomotion::apply_impulse;

pub fn player_action_observer(
    trigger: On<InputEvent>,
    mut players: Query<(Entity, &MapPosition, &mut StatBlock, &PlayerControlled)>,
    mut impulses: MessageWriter<ImpulseRequest>,
    mut spawns: MessageWriter<SpawnRequest>,
) {
    let event = *trigger.event();
    for (entity, position, mut stats, controlled) in players.iter_mut() {
        match (event.action, event.phase) {
            (InputAction::Jump, InputPhase::Pressed) => {
                apply_impulse(&mut impulses, entity, Vec2::Y * stats.jump_force);
            }
            (InputAction::Sprint, InputPhase::Pressed) => {
                stats.start_sprint();
                debug!("{:?} sprint on, speed {}", entity, stats.move_speed());
            }
            (InputAction::Sprint, InputPhase::Released) => {
                stats.stop_sprint();
                debug!("{:?} sprint off, speed {}", entity, stats.move_speed());
            }
            (InputAction::SpawnEnemy, InputPhase::Pressed) => {
                let Some(prefab) = controlled.enemy_prefab.as_ref() else {
                    warn!("{:?} has no enemy prefab configured; spawn ignored", entity);
                    continue;
                };
                spawns.write(SpawnRequest::at(
                    prefab.clone(),
                    controlled.enemy_spawn_point(position.pos),
                ));
            }
            (InputAction::Jump | InputAction::SpawnEnemy, InputPhase::Released) => {}
        }
    }
}
