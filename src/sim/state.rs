//! Game state and core simulation types
//!
//! Everything one session owns lives in [`GameState`]; the tick mutates it
//! in place and reports side effects as [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the start trigger; nothing advances
    #[default]
    Start,
    /// Active gameplay
    Playing,
}

/// Ratio-scaled field geometry shared by every simulation step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub ratio: f32,
    pub player_size: f32,
    pub enemy_size: f32,
    pub projectile_size: f32,
    pub enemy_rows: u32,
    pub enemies_per_row: u32,
    pub star_count: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::scaled(BASE_WIDTH, BASE_HEIGHT, PIXEL_RATIO)
    }
}

impl Geometry {
    /// Default layout on a field of the given base size and pixel ratio
    pub fn scaled(base_width: f32, base_height: f32, ratio: f32) -> Self {
        Self {
            width: base_width * ratio,
            height: base_height * ratio,
            ratio,
            player_size: PLAYER_SIZE * ratio,
            enemy_size: ENEMY_SIZE * ratio,
            projectile_size: PROJECTILE_SIZE * ratio,
            enemy_rows: ENEMY_ROWS,
            enemies_per_row: ENEMIES_PER_ROW,
            star_count: STAR_COUNT,
        }
    }

    /// Distance between neighbouring enemy origins
    pub fn enemy_pitch(&self) -> f32 {
        self.enemy_size + ENEMY_SPACING * self.ratio
    }

    pub fn formation_origin(&self) -> Vec2 {
        Vec2::splat(FORMATION_ORIGIN * self.ratio)
    }

    pub fn formation_drop(&self) -> f32 {
        FORMATION_DROP * self.ratio
    }

    /// Rightmost legal x for an enemy
    pub fn enemy_max_x(&self) -> f32 {
        self.width - self.enemy_size
    }

    /// Rightmost legal x for the player
    pub fn player_max_x(&self) -> f32 {
        self.width - self.player_size
    }

    pub fn projectile_speed(&self) -> f32 {
        PROJECTILE_SPEED * self.ratio
    }

    pub fn player_step(&self) -> f32 {
        PLAYER_STEP * self.ratio
    }

    /// Enemies in a freshly generated wave
    pub fn formation_len(&self) -> usize {
        (self.enemy_rows * self.enemies_per_row) as usize
    }

    /// Player spawn point: bottom center
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.player_size)
    }
}

/// The player's ship (position is the top-left of its triangle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub fn spawn(geometry: &Geometry) -> Self {
        Self {
            pos: geometry.player_spawn(),
        }
    }

    /// Shift horizontally, clamped to the field
    pub fn shift(&mut self, dx: f32, geometry: &Geometry) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, geometry.player_max_x());
    }
}

/// A formation member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub row: u32,
    pub col: u32,
}

/// A player shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
}

/// A parallax background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub base_speed: f32,
}

/// Shared horizontal heading of the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The live enemy set, moved as one rigid body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub enemies: Vec<Enemy>,
    pub direction: Direction,
}

impl Formation {
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }
}

/// Side effects produced by one tick, dispatched after the tick completes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile was fired from the given position
    Shot { pos: Vec2 },
    /// An enemy was destroyed
    EnemyDestroyed { row: u32, col: u32, points: u64 },
    /// The formation was wiped out and a new wave spawned
    WaveCleared { level: u32 },
    /// An enemy slipped past the bottom edge and re-entered at the top
    EnemyRecycled { row: u32, col: u32, x: f32 },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, reapplied on every session start
    pub seed: u64,
    pub rng: Pcg32,
    pub geometry: Geometry,
    pub phase: SessionPhase,
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Simulation tick counter for the current session
    pub time_ticks: u64,
    pub player: Player,
    pub formation: Formation,
    pub projectiles: Vec<Projectile>,
    pub stars: Vec<Star>,
}

impl GameState {
    /// Create an idle state; entities are populated on session start
    pub fn new(geometry: Geometry, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            geometry,
            phase: SessionPhase::Start,
            score: 0,
            level: 1,
            time_ticks: 0,
            player: Player::spawn(&geometry),
            formation: Formation::default(),
            projectiles: Vec::new(),
            stars: Vec::new(),
        }
    }

    /// Reset everything for a fresh session and enter `Playing`
    pub fn begin_session(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = SessionPhase::Playing;
        self.score = 0;
        self.level = 1;
        self.time_ticks = 0;
        self.projectiles.clear();
        self.player = Player::spawn(&self.geometry);
        self.stars = super::stars::create_stars(&self.geometry, &mut self.rng);
        self.formation = super::formation::generate_formation(&self.geometry);
    }
}
