//! Minimal dynamic body standing in for the host physics engine.
//!
//! The [`RigidBody`] component stores velocity, mass and how strongly the
//! world gravity pulls on the entity. It receives impulses (jumps) through
//! [`ImpulseRequest`](crate::events::spawn::ImpulseRequest) messages and is
//! integrated by [`integrate_bodies`](crate::systems::movement::integrate_bodies).
//! There is no collision response: the only constraint is the floor plane
//! configured in [`GameConfig`](crate::resources::gameconfig::GameConfig).
//!
//! The `frozen` flag temporarily disables integration, useful when an
//! entity's position is driven by something else.

use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Dynamic body storing velocity and gravity response.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `mass` - Used to turn impulses into velocity changes
/// - `gravity_scale` - Multiplier for world gravity (0.0 = floating)
/// - `frozen` - When true, physics skips this entity
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Body mass. Always strictly positive.
    mass: f32,
    /// Multiplier applied to the world gravity.
    pub gravity_scale: f32,
    /// When true, the physics step skips this entity.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with unit mass, zero velocity and full gravity.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            mass: 1.0,
            gravity_scale: 1.0,
            frozen: false,
        }
    }

    /// Create a RigidBody with explicit mass and gravity scale.
    /// Non-positive masses are replaced by 1.0.
    pub fn with_mass(mass: f32, gravity_scale: f32) -> Self {
        Self {
            mass: if mass > 0.0 { mass } else { 1.0 },
            gravity_scale,
            ..Self::new()
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Instantaneous velocity change: `velocity += impulse / mass`.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert!(approx_eq(rb.mass(), 1.0));
        assert!(approx_eq(rb.gravity_scale, 1.0));
        assert!(!rb.frozen);
    }

    #[test]
    fn test_with_mass_rejects_non_positive() {
        assert!(approx_eq(RigidBody::with_mass(0.0, 1.0).mass(), 1.0));
        assert!(approx_eq(RigidBody::with_mass(-3.0, 1.0).mass(), 1.0));
        assert!(approx_eq(RigidBody::with_mass(2.0, 0.5).mass(), 2.0));
    }

    #[test]
    fn test_impulse_divides_by_mass() {
        let mut rb = RigidBody::with_mass(2.0, 1.0);
        rb.apply_impulse(Vec2::new(0.0, 10.0));
        assert!(approx_eq(rb.velocity.y, 5.0));
        rb.apply_impulse(Vec2::new(4.0, 0.0));
        assert!(approx_eq(rb.velocity.x, 2.0));
        assert!(approx_eq(rb.velocity.y, 5.0));
    }
}
