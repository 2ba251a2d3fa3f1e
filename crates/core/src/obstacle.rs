//! Obstacle descriptors and the recycling track.
//!
//! An obstacle is a paired upper/lower barrier with one passable gap. The
//! track owns the ordered set of active obstacles; the reference design
//! keeps exactly one alive and replaces it only after it has fully left
//! the field on the left.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use tui_flappy_types::{
    Rect, FIELD_HEIGHT, FIELD_WIDTH, GAP_TOP_MAX, GAP_TOP_MIN, MAX_OBSTACLES, OBSTACLE_WIDTH,
};

/// A single obstacle: solid above `gap_top` and below `gap_top + gap_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Leading (left) horizontal edge; decreases as the field scrolls.
    pub x: f32,
    /// Top of the passable gap.
    pub gap_top: f32,
    /// Set once the trailing edge has crossed left of the entity.
    pub passed: bool,
}

impl Obstacle {
    /// Right edge of the obstacle.
    pub fn trailing_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Solid rectangle above the gap.
    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, OBSTACLE_WIDTH, self.gap_top)
    }

    /// Solid rectangle below the gap. It extends to the bottom of the
    /// field; the ground check handles the floor independently.
    pub fn lower_rect(&self, gap_height: f32) -> Rect {
        let top = self.gap_top + gap_height;
        Rect::new(self.x, top, OBSTACLE_WIDTH, FIELD_HEIGHT - top)
    }
}

/// Ordered queue of active obstacles plus the generator that refills it.
#[derive(Debug, Clone)]
pub struct Track {
    obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    rng: SimpleRng,
}

impl Track {
    /// An empty track with a seeded gap generator. Call [`Track::reset`]
    /// to populate it for a run.
    pub fn new(seed: u32) -> Self {
        Self {
            obstacles: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Reinitialize with exactly one freshly generated obstacle.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        let fresh = self.generate();
        self.obstacles.push(fresh);
    }

    /// New obstacle at the right edge of the field with a random gap top.
    fn generate(&mut self) -> Obstacle {
        Obstacle {
            x: FIELD_WIDTH,
            gap_top: self.rng.next_in_range(GAP_TOP_MIN, GAP_TOP_MAX) as f32,
            passed: false,
        }
    }

    /// Move every obstacle left by the per-tick scroll speed.
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Remove the leading obstacle once its trailing edge has fully left
    /// the field, appending a fresh replacement. Returns true if a swap
    /// happened.
    pub fn recycle(&mut self) -> bool {
        let exited = self
            .obstacles
            .first()
            .is_some_and(|front| front.trailing_edge() < 0.0);
        if exited {
            self.obstacles.remove(0);
            let fresh = self.generate();
            self.obstacles.push(fresh);
        }
        exited
    }

    /// Mark any unpassed obstacle whose trailing edge has crossed left of
    /// `entity_x` as passed. Returns true if one was marked this tick
    /// (one score increment); marking is idempotent per obstacle.
    pub fn mark_passed_and_score(&mut self, entity_x: f32) -> bool {
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.trailing_edge() < entity_x {
                obstacle.passed = true;
                return true;
            }
        }
        false
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }
}
