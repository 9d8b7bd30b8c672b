//! Star Volley - a vertical arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation motion, projectiles, collisions, waves)
//! - `game`: Session orchestration and effect dispatch
//! - `audio`: Fire-and-forget sound effect seam
//! - `present`: Rendering and score display seams
//! - `input`: Player intents
//! - `settings`: Data-driven field and audio configuration

pub mod audio;
pub mod game;
pub mod input;
pub mod present;
pub mod settings;
pub mod sim;

pub use audio::{AudioBackend, AudioError, AudioManager, LogBackend, SoundEffect};
pub use game::Game;
pub use input::Intent;
pub use present::{Frame, Renderer, ScoreDisplay, TextDisplay};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Sizes, distances and speeds are in base units; multiply by the pixel
/// ratio to get field units.
pub mod consts {
    /// Field dimensions before pixel-ratio scaling
    pub const BASE_WIDTH: f32 = 400.0;
    pub const BASE_HEIGHT: f32 = 400.0;
    /// Device pixel ratio applied uniformly to every size and speed
    pub const PIXEL_RATIO: f32 = 2.0;

    /// Entity sizes
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const ENEMY_SIZE: f32 = 15.0;
    pub const PROJECTILE_SIZE: f32 = 5.0;

    /// Formation layout
    pub const ENEMY_ROWS: u32 = 4;
    pub const ENEMIES_PER_ROW: u32 = 8;
    /// Gap between neighbouring enemies
    pub const ENEMY_SPACING: f32 = 10.0;
    /// Top-left corner of the formation (both axes)
    pub const FORMATION_ORIGIN: f32 = 50.0;
    /// Vertical drop applied on a wall bounce
    pub const FORMATION_DROP: f32 = 5.0;

    /// Formation horizontal speed: BASE + level * PER_LEVEL
    pub const ENEMY_BASE_SPEED: f32 = 0.5;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.1;

    /// Projectile travel per tick
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Player travel per move intent
    pub const PLAYER_STEP: f32 = 10.0;

    /// Points per destroyed enemy, multiplied by the current level
    pub const POINTS_PER_KILL: u64 = 10;

    /// Parallax background
    pub const STAR_COUNT: usize = 100;
    pub const STAR_MIN_RADIUS: f32 = 1.0;
    pub const STAR_MAX_RADIUS: f32 = 3.0;
    pub const STAR_MIN_SPEED: f32 = 0.5;
    pub const STAR_MAX_SPEED: f32 = 1.0;
    /// Star speed multiplier gained per level past the first
    pub const STAR_SPEED_PER_LEVEL: f32 = 0.1;

    /// Default run seed
    pub const DEFAULT_SEED: u64 = 0x5EED_57A2;

    /// Default audio levels (0.0 - 1.0)
    pub const DEFAULT_MASTER_VOLUME: f32 = 0.8;
    pub const DEFAULT_SFX_VOLUME: f32 = 1.0;
}
