use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Axis-aligned rectangular collider, relative to the entity position.
///
/// Trigger colliders report zone entry instead of physical contact.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    pub is_trigger: bool,
}

impl BoxCollider {
    /// Create a solid BoxCollider with given size, centered on the entity.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::new(-width * 0.5, -height * 0.5),
            is_trigger: false,
        }
    }

    /// Create a trigger BoxCollider with given size, centered on the entity.
    pub fn trigger(width: f32, height: f32) -> Self {
        Self {
            is_trigger: true,
            ..Self::new(width, height)
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}
