//! Input systems.
//!
//! - [`emit_input_events`] turns the edges recorded in
//!   [`InputState`](crate::resources::input::InputState) into
//!   [`InputEvent`] triggers.
//! - [`clear_input_edges`] forgets this tick's edges once everything has run.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;

/// Trigger one `InputEvent` per recorded edge.
///
/// Within a tick, presses are emitted before releases so a tap recorded
/// between two ticks still reads as press-then-release.
pub fn emit_input_events(input: Res<InputState>, mut commands: Commands) {
    for action in InputAction::ALL {
        let state = input.state(action);
        if state.just_pressed {
            debug!("input pressed: {:?}", action);
            commands.trigger(InputEvent::pressed(action));
        }
        if state.just_released {
            debug!("input released: {:?}", action);
            commands.trigger(InputEvent::released(action));
        }
    }
}

/// Reset the per-tick edge flags, keeping held state.
pub fn clear_input_edges(mut input: ResMut<InputState>) {
    input.clear_edges();
}
