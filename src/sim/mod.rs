//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-frame deltas only
//! - Injected randomness only
//! - Timestamps passed in by the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod random;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps_with_margin};
pub use random::{Randomness, ScriptedRolls, seeded};
pub use state::{
    GamePhase, GameState, Hostile, Particle, Playfield, Player, PowerUp, PowerUpKind, Projectile,
    Session, SessionSummary, Star,
};
pub use tick::{GameEvent, TickInput, fire, resolve_collisions, update};
