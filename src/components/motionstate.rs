//! Constant-speed locomotion along a facing direction.
//!
//! [`MotionState`] stores a signed speed and a unit facing vector. Each tick
//! the [`motion_system`](crate::systems::locomotion::motion_system) advances the
//! entity's [`MapPosition`](super::mapposition::MapPosition) by
//! `direction * speed * dt`. A negative speed walks backwards along the
//! facing, so reversing the sign of `speed` is equivalent to reversing
//! `direction`.

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Which way along its facing an entity is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    MovingPositive,
    MovingNegative,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    /// Signed speed in world units per second.
    pub speed: f32,
    /// Facing. Always unit length.
    direction: Vec2,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new(0.0, Vec2::X)
    }
}

impl MotionState {
    /// Create a motion state. A zero or non-finite `direction` falls back to +X.
    pub fn new(speed: f32, direction: Vec2) -> Self {
        Self {
            speed,
            direction: direction.try_normalize().unwrap_or(Vec2::X),
        }
    }

    /// Motion along the world X axis, the default facing of spawned walkers.
    pub fn horizontal(speed: f32) -> Self {
        Self::new(speed, Vec2::X)
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    /// Displacement covered in `dt` seconds. Negative `dt` counts as zero.
    pub fn displacement(&self, dt: f32) -> Vec2 {
        self.velocity() * dt.max(0.0)
    }

    /// Euler step: move `position` by `direction * speed * dt`.
    pub fn advance(&self, position: &mut Vec2, dt: f32) {
        *position += self.displacement(dt);
    }

    /// Flip the sign of the speed.
    pub fn reverse(&mut self) {
        self.speed = -self.speed;
    }

    pub fn heading(&self) -> Heading {
        if self.speed.is_sign_negative() {
            Heading::MovingNegative
        } else {
            Heading::MovingPositive
        }
    }
}
