//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when gameplay-relevant
//! input actions occur (press or release). The [`InputAction`] enum lists all
//! recognized actions.
//!
//! Systems can subscribe to these events to react to input edges without
//! polling the [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Jump (default: Space).
    Jump,
    /// Sprint while held (default: Left Shift).
    Sprint,
    /// Spawn an enemy above the player (default: E).
    SpawnEnemy,
}

impl InputAction {
    pub const ALL: [InputAction; 3] = [InputAction::Jump, InputAction::Sprint, InputAction::SpawnEnemy];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputPhase {
    Pressed,
    Released,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Press or release edge.
    pub phase: InputPhase,
}

impl InputEvent {
    pub fn pressed(action: InputAction) -> Self {
        Self {
            action,
            phase: InputPhase::Pressed,
        }
    }

    pub fn released(action: InputAction) -> Self {
        Self {
            action,
            phase: InputPhase::Released,
        }
    }
}
