//! Input drivers for headless runs.
//!
//! The binary has no keyboard, so an [`Autopilot`] plays the role of the
//! player and writes into [`InputState`] before each tick:
//!
//! - [`Autopilot::Scripted`] replays a fixed sequence: walk right through
//!   the trigger zone, jump, sprint, spawn an enemy, then walk back left to
//!   the pickup.
//! - [`Autopilot::Random`] mashes buttons from a seeded [`fastrand::Rng`],
//!   so a run can be reproduced from its seed.

use fastrand::Rng;

use crate::events::input::InputAction;
use crate::resources::input::InputState;

const WALK_RIGHT_UNTIL: u32 = 240;
const WALK_LEFT_UNTIL: u32 = 600;
const JUMP_AT: u32 = 60;
const SPRINT_FROM: u32 = 120;
const SPRINT_UNTIL: u32 = 180;
const SPAWN_ENEMY_AT: u32 = 200;

pub enum Autopilot {
    Scripted,
    Random(Rng),
}

impl Autopilot {
    pub fn random(seed: u64) -> Self {
        Autopilot::Random(Rng::with_seed(seed))
    }

    /// Write the input for tick number `tick` (0-based).
    pub fn drive(&mut self, tick: u32, input: &mut InputState) {
        match self {
            Autopilot::Scripted => scripted(tick, input),
            Autopilot::Random(rng) => random(rng, input),
        }
    }
}

fn scripted(tick: u32, input: &mut InputState) {
    let axis = if tick < WALK_RIGHT_UNTIL {
        1.0
    } else if tick < WALK_LEFT_UNTIL {
        -1.0
    } else {
        0.0
    };
    input.set_horizontal(axis);

    match tick {
        JUMP_AT => input.press(InputAction::Jump),
        SPRINT_FROM => input.press(InputAction::Sprint),
        SPRINT_UNTIL => input.release(InputAction::Sprint),
        SPAWN_ENEMY_AT => input.press(InputAction::SpawnEnemy),
        _ => {}
    }
    // buttons other than sprint are taps
    if tick == JUMP_AT + 1 {
        input.release(InputAction::Jump);
    }
    if tick == SPAWN_ENEMY_AT + 1 {
        input.release(InputAction::SpawnEnemy);
    }
}

fn random(rng: &mut Rng, input: &mut InputState) {
    if rng.u32(0..30) == 0 {
        input.set_horizontal(rng.f32() * 2.0 - 1.0);
    }
    for (action, one_in) in [
        (InputAction::Jump, 90),
        (InputAction::Sprint, 120),
        (InputAction::SpawnEnemy, 300),
    ] {
        if rng.u32(0..one_in) != 0 {
            continue;
        }
        if input.is_held(action) {
            input.release(action);
        } else {
            input.press(action);
        }
    }
}
