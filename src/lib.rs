//! Space Shooter - A canvas arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, scoring)
//! - `controller`: Game loop state machine (start/pause/reset, frame driving)
//! - `renderer`: Draw surface abstraction and Canvas 2D backend
//! - `platform`: Clock, tick source, randomness and HUD seams
//! - `tuning`: Data-driven game balance
//! - `settings`: Visual preferences

pub mod controller;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use controller::{FrameOutcome, GameLoop, Key};
pub use error::ConfigError;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest playfield edge (pixels)
    pub const MAX_PLAYFIELD_SIZE: f32 = 800.0;
    /// Horizontal padding subtracted from the container width
    pub const PLAYFIELD_PADDING: f32 = 40.0;
    /// Smallest playfield edge, keeps spawn ranges non-empty
    pub const MIN_PLAYFIELD_SIZE: f32 = 200.0;

    /// Player craft defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Distance from the bottom edge to the craft's top at spawn
    pub const PLAYER_START_OFFSET_Y: f32 = 60.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 12.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;

    /// Hostile and power-up box size
    pub const HOSTILE_SIZE: f32 = 30.0;
    pub const POWER_UP_SIZE: f32 = 30.0;
    /// Spawn height for descending entities (just above the playfield)
    pub const SPAWN_Y: f32 = -30.0;
    pub const POWER_UP_SPEED: f32 = 0.2;

    /// Explosion burst
    pub const BURST_PARTICLES: usize = 10;
    pub const PARTICLE_LIFETIME: u32 = 30;
    pub const PARTICLE_MAX_SPEED: f32 = 10.0;

    /// Session defaults
    pub const MAX_HEALTH: i32 = 100;
    pub const START_LEVEL: u32 = 1;
}
