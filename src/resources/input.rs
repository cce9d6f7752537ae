//! Per-tick input resource.
//!
//! The host writes discrete edges (`press` / `release`) and the continuous
//! horizontal axis level into [`InputState`]. During the tick,
//! [`emit_input_events`](crate::systems::input::emit_input_events) turns the
//! recorded edges into [`InputEvent`](crate::events::input::InputEvent)
//! triggers, and [`clear_input_edges`](crate::systems::input::clear_input_edges)
//! resets them at the end of the tick. Held state survives across ticks.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::events::input::InputAction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with edge flags for the current tick.
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this tick.
    pub just_pressed: bool,
    /// Whether the action was released this tick.
    pub just_released: bool,
}

/// Resource capturing the input relevant to gameplay for the current tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Horizontal axis sample in [-1, 1].
    horizontal: f32,
    actions: FxHashMap<InputAction, BoolState>,
}

impl InputState {
    /// Record a pressed edge. Repeated presses while held are still reported.
    pub fn press(&mut self, action: InputAction) {
        let state = self.actions.entry(action).or_default();
        state.active = true;
        state.just_pressed = true;
    }

    /// Record a released edge.
    pub fn release(&mut self, action: InputAction) {
        let state = self.actions.entry(action).or_default();
        state.active = false;
        state.just_released = true;
    }

    /// Set the horizontal axis level, clamped to [-1, 1]. NaN reads as 0.
    pub fn set_horizontal(&mut self, value: f32) {
        self.horizontal = if value.is_nan() {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn state(&self, action: InputAction) -> BoolState {
        self.actions.get(&action).copied().unwrap_or_default()
    }

    pub fn is_held(&self, action: InputAction) -> bool {
        self.state(action).active
    }

    /// Forget this tick's edges, keeping held state and the axis.
    pub fn clear_edges(&mut self) {
        for state in self.actions.values_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }
}
