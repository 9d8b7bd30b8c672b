//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per scheduled frame
//! - Seeded RNG only
//! - Stable iteration order (formation order is row-major)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod formation;
pub mod projectile;
pub mod stars;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{CollisionOutcome, is_hit, points_for_kill, resolve_collisions};
pub use formation::{advance_formation, generate_formation, horizontal_speed, recycle_breached};
pub use projectile::{advance_projectiles, spawn_projectile};
pub use stars::{create_stars, update_stars};
pub use state::{
    Direction, Enemy, Formation, GameEvent, GameState, Geometry, Player, Projectile, SessionPhase,
    Star,
};
pub use tick::{TickInput, tick};
pub use wave::progress_wave;
