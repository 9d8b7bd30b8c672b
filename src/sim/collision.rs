//! Projectile/enemy hit resolution and scoring
//!
//! Hits use an axis-aligned proximity test against the enemy size only; the
//! projectile's own extent is ignored. Projectiles are not consumed by a hit,
//! so one shot may take out several enemies in the same tick.

use super::state::{Enemy, Formation, Projectile};
use crate::consts::POINTS_PER_KILL;

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Enemies removed this tick, in formation order
    pub destroyed: Vec<Enemy>,
    /// Points awarded for each kill
    pub points_each: u64,
}

impl CollisionOutcome {
    pub fn total_points(&self) -> u64 {
        self.points_each * self.destroyed.len() as u64
    }
}

/// Points for one kill at the given level
pub fn points_for_kill(level: u32) -> u64 {
    POINTS_PER_KILL * level as u64
}

/// Proximity test between an enemy and a projectile
#[inline]
pub fn is_hit(enemy: &Enemy, projectile: &Projectile, enemy_size: f32) -> bool {
    (enemy.pos.x - projectile.pos.x).abs() < enemy_size
        && (enemy.pos.y - projectile.pos.y).abs() < enemy_size
}

/// Remove every enemy that any live projectile is close enough to.
pub fn resolve_collisions(
    formation: &mut Formation,
    projectiles: &[Projectile],
    enemy_size: f32,
    level: u32,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome {
        destroyed: Vec::new(),
        points_each: points_for_kill(level),
    };

    if projectiles.is_empty() {
        return outcome;
    }

    formation.enemies.retain(|enemy| {
        let hit = projectiles.iter().any(|p| is_hit(enemy, p, enemy_size));
        if hit {
            outcome.destroyed.push(*enemy);
        }
        !hit
    });

    outcome
}
