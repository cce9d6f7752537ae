use bevy_ecs::prelude::Component;

/// Spawn orientation in degrees. `Rotation::IDENTITY` keeps the prefab's default facing.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation { degrees: 0.0 };
}
