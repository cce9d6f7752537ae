//! Player movement stats and the modifiers that act on them.
//!
//! [`StatBlock`] keeps the base movement speed (which already includes every
//! permanent upgrade), the jump force and the sprint bonus. Sprinting is an
//! additive toggle driven by press/release edges:
//!
//! - `start_sprint` adds one sprint bonus, `stop_sprint` removes one.
//! - The toggle is *not* guarded: two starts without a stop stack the bonus
//!   twice, and a stop without a start subtracts it. Input edges arrive in
//!   press/release pairs, so this only shows up with malformed edge streams.
//!
//! Sprinting is tracked as an integer level instead of being folded into the
//! float speed, so `start_sprint(); stop_sprint()` restores the effective
//! speed bit-for-bit.

use bevy_ecs::prelude::Component;

/// Default additive sprint bonus in world units per second.
pub const DEFAULT_SPRINT_BONUS: f32 = 5.0;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct StatBlock {
    /// Base movement speed, including permanent upgrades.
    pub base_speed: f32,
    /// Impulse magnitude applied upwards on jump.
    pub jump_force: f32,
    /// Additive bonus applied per active sprint.
    pub sprint_bonus: f32,
    /// Number of sprint starts not yet matched by a stop.
    sprint_level: i32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_SPRINT_BONUS)
    }
}

impl StatBlock {
    pub fn new(base_speed: f32, jump_force: f32, sprint_bonus: f32) -> Self {
        Self {
            base_speed,
            jump_force,
            sprint_bonus,
            sprint_level: 0,
        }
    }

    /// Effective move speed: base plus whatever sprint bonus is applied.
    pub fn move_speed(&self) -> f32 {
        self.base_speed + self.sprint_level as f32 * self.sprint_bonus
    }

    /// Permanently raise the base speed. No upper bound.
    pub fn upgrade(&mut self, amount: f32) {
        self.base_speed += amount;
    }

    pub fn start_sprint(&mut self) {
        self.sprint_level += 1;
    }

    pub fn stop_sprint(&mut self) {
        self.sprint_level -= 1;
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprint_level > 0
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
    fn new_starts_without_sprint() {
        let stats = StatBlock::new(5.0, 7.0, 5.0);
        assert!(!stats.is_sprinting());
        assert!(approx_eq(stats.move_speed(), 5.0));
    }

    #[test]
    fn upgrades_are_additive() {
        let mut stats = StatBlock::new(5.0, 0.0, 5.0);
        stats.upgrade(1.5);
        stats.upgrade(2.5);
        assert!(approx_eq(stats.base_speed, 9.0));
        assert!(approx_eq(stats.move_speed(), 9.0));
    }

    #[test]
    fn upgrades_commute() {
        let mut a = StatBlock::new(3.0, 0.0, 5.0);
        a.upgrade(0.5);
        a.upgrade(4.0);
        let mut b = StatBlock::new(3.0, 0.0, 5.0);
        b.upgrade(4.0);
        b.upgrade(0.5);
        assert_eq!(a.base_speed, b.base_speed);
    }

    #[test]
    fn upgrade_has_no_cap() {
        let mut stats = StatBlock::new(1.0, 0.0, 5.0);
        for _ in 0..1000 {
            stats.upgrade(100.0);
        }
        assert!(approx_eq(stats.base_speed, 100_001.0));
    }

    #[test]
    fn sprint_adds_bonus_while_active() {
        let mut stats = StatBlock::new(5.0, 0.0, 5.0);
        stats.start_sprint();
        assert!(stats.is_sprinting());
        assert!(approx_eq(stats.move_speed(), 10.0));
        // base speed itself is untouched
        assert!(approx_eq(stats.base_speed, 5.0));
    }

    #[test]
    fn start_then_stop_restores_speed_exactly() {
        let mut stats = StatBlock::new(0.1 + 0.2, 0.0, 5.0);
        let before = stats.move_speed();
        stats.start_sprint();
        stats.stop_sprint();
        assert_eq!(stats.move_speed(), before);
    }

    #[test]
    fn double_start_stacks_bonus() {
        let mut stats = StatBlock::new(5.0, 0.0, 5.0);
        stats.start_sprint();
        stats.start_sprint();
        assert!(stats.is_sprinting());
        assert!(approx_eq(stats.move_speed(), 15.0));
        stats.stop_sprint();
        assert!(approx_eq(stats.move_speed(), 10.0));
    }

    #[test]
    fn stop_without_start_subtracts_bonus() {
        let mut stats = StatBlock::new(5.0, 0.0, 5.0);
        stats.stop_sprint();
        assert!(!stats.is_sprinting());
        assert!(approx_eq(stats.move_speed(), 0.0));
    }

    #[test]
    fn upgrade_during_sprint_survives_stop() {
        let mut stats = StatBlock::new(5.0, 0.0, 5.0);
        stats.start_sprint();
        stats.upgrade(2.0);
        assert!(approx_eq(stats.move_speed(), 12.0));
        stats.stop_sprint();
        assert!(approx_eq(stats.move_speed(), 7.0));
    }
}
