//! Projectile spawning and travel

use glam::Vec2;

use super::state::{Geometry, Player, Projectile};

/// Spawn a shot centered on the player's nose
pub fn spawn_projectile(player: &Player, geometry: &Geometry) -> Projectile {
    Projectile {
        pos: Vec2::new(player.pos.x + geometry.player_size / 2.0, player.pos.y),
    }
}

/// Move every projectile up one step and drop those that left the top edge.
/// Returns how many expired.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, geometry: &Geometry) -> usize {
    let speed = geometry.projectile_speed();
    let before = projectiles.len();
    projectiles.retain_mut(|p| {
        p.pos.y -= speed;
        p.pos.y > 0.0
    });
    before - projectiles.len()
}
