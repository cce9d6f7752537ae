use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// World-space position of an entity. Y grows upwards.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Translate the position by a delta vector.
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}
