//! Formation motion
//!
//! The enemy grid moves as one rigid body: a single shared heading, a single
//! per-tick displacement, and a row drop whenever it touches either wall.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, Formation, Geometry};
use crate::consts::{ENEMY_BASE_SPEED, ENEMY_SPEED_PER_LEVEL};

/// Horizontal formation speed for a level (field units per tick)
pub fn horizontal_speed(level: u32, ratio: f32) -> f32 {
    ratio * (ENEMY_BASE_SPEED + level as f32 * ENEMY_SPEED_PER_LEVEL)
}

/// Lay out a fresh wave in row-major order from the formation origin
pub fn generate_formation(geometry: &Geometry) -> Formation {
    let origin = geometry.formation_origin();
    let pitch = geometry.enemy_pitch();

    let mut enemies = Vec::with_capacity(geometry.formation_len());
    for row in 0..geometry.enemy_rows {
        for col in 0..geometry.enemies_per_row {
            enemies.push(Enemy {
                pos: origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                row,
                col,
            });
        }
    }

    Formation {
        enemies,
        direction: Default::default(),
    }
}

/// Horizontal extent of the formation as (leftmost x, rightmost x)
pub fn extent(formation: &Formation) -> Option<(f32, f32)> {
    formation.enemies.iter().fold(None, |acc, e| match acc {
        None => Some((e.pos.x, e.pos.x)),
        Some((min, max)) => Some((min.min(e.pos.x), max.max(e.pos.x))),
    })
}

/// Advance the formation by one tick.
///
/// The wall test runs on positions before moving. Touching either wall flips
/// the heading and drops every enemy by the fixed increment; then every
/// enemy moves by the same signed step.
/// Returns whether a bounce happened.
pub fn advance_formation(formation: &mut Formation, level: u32, geometry: &Geometry) -> bool {
    let Some((leftmost, rightmost)) = extent(formation) else {
        return false;
    };

    let touching = leftmost <= 0.0 || rightmost >= geometry.enemy_max_x();

    if touching {
        formation.direction = formation.direction.flipped();
        let drop = geometry.formation_drop();
        for enemy in &mut formation.enemies {
            enemy.pos.y += drop;
        }
    }

    let dx = formation.direction.sign() * horizontal_speed(level, geometry.ratio);
    for enemy in &mut formation.enemies {
        enemy.pos.x += dx;
    }

    touching
}

/// Send enemies whose bottom edge reached the floor back to the top at a
/// random column position. Returns the recycled enemies (post-move).
pub fn recycle_breached<R: Rng>(
    formation: &mut Formation,
    geometry: &Geometry,
    rng: &mut R,
) -> Vec<Enemy> {
    let mut recycled = Vec::new();
    let max_x = geometry.enemy_max_x().max(0.0);

    for enemy in &mut formation.enemies {
        if enemy.pos.y + geometry.enemy_size >= geometry.height {
            enemy.pos.y = 0.0;
            enemy.pos.x = rng.random_range(0.0..=max_x);
            recycled.push(*enemy);
        }
    }

    recycled
}
