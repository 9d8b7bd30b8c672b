//! Parallax star field
//!
//! Purely cosmetic. Stars drift down a little faster each level and wrap to
//! the top at a fresh column once they fall off the bottom.

use glam::Vec2;
use rand::Rng;

use super::state::{Geometry, Star};
use crate::consts::*;

/// Scatter a fresh star field over the whole playfield
pub fn create_stars<R: Rng>(geometry: &Geometry, rng: &mut R) -> Vec<Star> {
    (0..geometry.star_count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..geometry.width),
                rng.random_range(0.0..geometry.height),
            ),
            radius: rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS) * geometry.ratio,
            base_speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
        })
        .collect()
}

/// Star speed multiplier for a level
pub fn star_speed_multiplier(level: u32) -> f32 {
    1.0 + level.saturating_sub(1) as f32 * STAR_SPEED_PER_LEVEL
}

/// Drift every star down one tick, wrapping those past the bottom edge
pub fn update_stars<R: Rng>(stars: &mut [Star], level: u32, geometry: &Geometry, rng: &mut R) {
    let multiplier = star_speed_multiplier(level) * geometry.ratio;
    for star in stars {
        star.pos.y += star.base_speed * multiplier;
        if star.pos.y > geometry.height {
            star.pos.y = 0.0;
            star.pos.x = rng.random_range(0.0..geometry.width);
        }
    }
}
