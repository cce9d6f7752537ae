//! Input-driven player component.
//!
//! [`PlayerControlled`] marks the entity that reads the shared
//! [`InputState`](crate::resources::input::InputState): the horizontal axis
//! drives [`player_locomotion`](crate::systems::locomotion::player_locomotion)
//! and action edges are handled by
//! [`player_action_observer`](crate::systems::player::player_action_observer).

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Default offset, relative to the player, where spawned enemies appear.
pub const DEFAULT_ENEMY_SPAWN_OFFSET: Vec2 = Vec2::new(0.0, 5.0);

#[derive(Component, Clone, Debug, PartialEq)]
pub struct PlayerControlled {
    /// Prefab spawned by the spawn-enemy action. `None` disables the action.
    pub enemy_prefab: Option<String>,
    /// Offset from the player's position for spawned enemies.
    pub enemy_spawn_offset: Vec2,
}

impl Default for PlayerControlled {
    fn default() -> Self {
        Self {
            enemy_prefab: None,
            enemy_spawn_offset: DEFAULT_ENEMY_SPAWN_OFFSET,
        }
    }
}

impl PlayerControlled {
    pub fn new(enemy_prefab: Option<String>, enemy_spawn_offset: Vec2) -> Self {
        Self {
            enemy_prefab,
            enemy_spawn_offset,
        }
    }

    pub fn enemy_spawn_point(&self, player_position: Vec2) -> Vec2 {
        player_position + self.enemy_spawn_offset
    }
}
