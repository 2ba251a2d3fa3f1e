//! The controlled entity: vertical physics only.
//!
//! The horizontal position is fixed at [`ENTITY_X`]; obstacles scroll past
//! instead. Velocity changes only through per-tick gravity accumulation or
//! a discrete impulse that overwrites (not adds to) the current velocity.

use tui_flappy_types::{Rect, ENTITY_HEIGHT, ENTITY_START_Y, ENTITY_WIDTH, ENTITY_X};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    position_y: f32,
    velocity_y: f32,
}

impl Bird {
    /// A bird at the fixed starting height with zero velocity.
    pub fn new() -> Self {
        Self {
            position_y: ENTITY_START_Y,
            velocity_y: 0.0,
        }
    }

    pub fn position_y(&self) -> f32 {
        self.position_y
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    /// Accumulate the per-tick gravity increment.
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
    }

    /// Flap: the impulse replaces the current velocity outright.
    pub fn apply_impulse(&mut self, impulse: f32) {
        self.velocity_y = impulse;
    }

    /// Integrate one tick of movement.
    pub fn integrate(&mut self) {
        self.position_y += self.velocity_y;
    }

    /// Bounding box in field coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(ENTITY_X, self.position_y, ENTITY_WIDTH, ENTITY_HEIGHT)
    }

    #[cfg(test)]
    pub(crate) fn set_position_y(&mut self, y: f32) {
        self.position_y = y;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bird_at_start_height_with_zero_velocity() {
        let bird = Bird::new();
        assert_eq!(bird.position_y(), ENTITY_START_Y);
        assert_eq!(bird.velocity_y(), 0.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut bird = Bird::new();
        bird.apply_gravity(0.3);
        bird.apply_gravity(0.3);
        assert!((bird.velocity_y() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_impulse_overwrites_velocity() {
        let mut bird = Bird::new();
        bird.apply_gravity(0.3);
        bird.apply_impulse(-7.0);
        assert_eq!(bird.velocity_y(), -7.0);

        // A second impulse does not stack.
        bird.apply_impulse(-7.0);
        assert_eq!(bird.velocity_y(), -7.0);
    }

    #[test]
    fn test_integrate_adds_velocity_once() {
        let mut bird = Bird::new();
        bird.apply_impulse(-7.0);
        let before = bird.position_y();
        bird.integrate();
        assert_eq!(bird.position_y(), before - 7.0);
    }

    #[test]
    fn test_one_tick_of_fall_matches_fixed_timestep_rule() {
        // position' == position + velocity + gravity when gravity is applied
        // before integration, the per-tick order the session uses.
        let mut bird = Bird::new();
        let (p0, v0) = (bird.position_y(), bird.velocity_y());
        bird.apply_gravity(0.45);
        bird.integrate();
        assert!((bird.position_y() - (p0 + v0 + 0.45)).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_use_fixed_x() {
        let mut bird = Bird::new();
        bird.apply_impulse(-7.0);
        bird.integrate();
        let b = bird.bounds();
        assert_eq!(b.x, ENTITY_X);
        assert_eq!(b.w, ENTITY_WIDTH);
        assert_eq!(b.h, ENTITY_HEIGHT);
        assert_eq!(b.y, bird.position_y());
    }
}
