//! Presentation seams
//!
//! Renderers and score displays are read-only consumers of the simulation.
//! They receive a borrowed [`Frame`] once per tick (and once while idle)
//! and can never feed anything back into game state.

use serde::Serialize;

use crate::sim::{Enemy, GameState, Geometry, Player, Projectile, SessionPhase, Star};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Frame<'a> {
    pub phase: SessionPhase,
    pub tick: u64,
    pub score: u64,
    pub level: u32,
    /// Field size and entity sizes needed to draw the glyphs
    pub geometry: &'a Geometry,
    pub player: &'a Player,
    pub stars: &'a [Star],
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
}

impl<'a> Frame<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            phase: state.phase,
            tick: state.time_ticks,
            score: state.score,
            level: state.level,
            geometry: &state.geometry,
            player: &state.player,
            stars: &state.stars,
            enemies: &state.formation.enemies,
            projectiles: &state.projectiles,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Draws entity snapshots
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Presents score and level
pub trait ScoreDisplay {
    fn show(&mut self, score: u64, level: u32);
}

/// HUD text for a score/level pair
pub fn score_line(score: u64, level: u32) -> String {
    format!("Score: {score} | Level: {level}")
}

/// Display that keeps the current HUD line as text
#[derive(Debug, Default, Clone)]
pub struct TextDisplay {
    line: String,
}

impl TextDisplay {
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl ScoreDisplay for TextDisplay {
    fn show(&mut self, score: u64, level: u32) {
        let line = score_line(score, level);
        if line != self.line {
            log::trace!("{line}");
            self.line = line;
        }
    }
}

/// Renderer for runs without a screen; counts frames and optionally keeps
/// the most recent frame as JSON
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub capture_json: bool,
    pub last_json: Option<String>,
}

impl HeadlessRenderer {
    pub fn capturing() -> Self {
        Self {
            capture_json: true,
            ..Default::default()
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if self.capture_json {
            match frame.to_json() {
                Ok(json) => self.last_json = Some(json),
                Err(err) => log::warn!("Failed to encode frame {}: {err}", frame.tick),
            }
        }
    }
}
