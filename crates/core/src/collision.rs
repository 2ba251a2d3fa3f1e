//! Collision detection: pure functions over boxes in field coordinates.
//!
//! Boundary checks and box-vs-box overlap both use closed intervals, so a
//! touching edge already counts as a collision.

use crate::obstacle::Obstacle;
use tui_flappy_types::Rect;

/// True if the entity box hits the ceiling, the floor, or any solid part
/// of an obstacle.
///
/// `ceiling_y` is the top boundary (usually 0) and `floor_y` the top of
/// the ground strip. Boundary violation is independent of obstacles.
pub fn check(
    entity: Rect,
    obstacles: &[Obstacle],
    gap_height: f32,
    ceiling_y: f32,
    floor_y: f32,
) -> bool {
    if entity.y <= ceiling_y || entity.y + entity.h >= floor_y {
        return true;
    }

    obstacles.iter().any(|obstacle| {
        entity.intersects(&obstacle.upper_rect())
            || entity.intersects(&obstacle.lower_rect(gap_height))
    })
}
