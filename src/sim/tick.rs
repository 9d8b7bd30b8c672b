//! Simulation tick
//!
//! One call advances the session by exactly one frame. The tick never
//! performs I/O; everything observable leaves through the returned events.

use super::collision::resolve_collisions;
use super::formation::{advance_formation, recycle_breached};
use super::projectile::{advance_projectiles, spawn_projectile};
use super::stars::update_stars;
use super::state::{GameEvent, GameState, SessionPhase};
use super::wave::progress_wave;
use crate::input::Intent;

/// Player intents collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        SessionPhase::Start => return events,
        SessionPhase::Playing => {}
    }

    state.time_ticks += 1;

    apply_intents(state, &input.intents, &mut events);

    update_stars(&mut state.stars, state.level, &state.geometry, &mut state.rng);

    if advance_formation(&mut state.formation, state.level, &state.geometry) {
        log::debug!(
            "Formation bounced, heading {:?} (tick {})",
            state.formation.direction,
            state.time_ticks
        );
    }

    advance_projectiles(&mut state.projectiles, &state.geometry);

    let outcome = resolve_collisions(
        &mut state.formation,
        &state.projectiles,
        state.geometry.enemy_size,
        state.level,
    );
    state.score = state.score.saturating_add(outcome.total_points());
    for enemy in &outcome.destroyed {
        log::debug!("Enemy ({}, {}) destroyed", enemy.row, enemy.col);
        events.push(GameEvent::EnemyDestroyed {
            row: enemy.row,
            col: enemy.col,
            points: outcome.points_each,
        });
    }

    if let Some(level) = progress_wave(&mut state.formation, &mut state.level, &state.geometry) {
        events.push(GameEvent::WaveCleared { level });
    }

    for enemy in recycle_breached(&mut state.formation, &state.geometry, &mut state.rng) {
        log::debug!("Enemy ({}, {}) breached, re-entering at x={:.1}", enemy.row, enemy.col, enemy.pos.x);
        events.push(GameEvent::EnemyRecycled {
            row: enemy.row,
            col: enemy.col,
            x: enemy.pos.x,
        });
    }

    events
}

fn apply_intents(state: &mut GameState, intents: &[Intent], events: &mut Vec<GameEvent>) {
    let step = state.geometry.player_step();
    for intent in intents {
        match intent {
            Intent::MoveLeft => state.player.shift(-step, &state.geometry),
            Intent::MoveRight => state.player.shift(step, &state.geometry),
            Intent::Fire => {
                let shot = spawn_projectile(&state.player, &state.geometry);
                state.projectiles.push(shot);
                events.push(GameEvent::Shot { pos: shot.pos });
            }
        }
    }
}
