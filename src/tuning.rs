//! Data-driven game balance
//!
//! Every gameplay number the simulation uses. Missing JSON fields fall back
//! to the defaults, so a page can override just the values it cares about.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Collisions ===
    /// Extra pixels added to every side of both boxes in overlap tests
    pub collision_margin: f32,

    // === Difficulty ===
    /// Global difficulty multiplier (scales hostile speed and spawn rate)
    pub difficulty: f32,
    /// Per-frame hostile spawn chance before the difficulty multiplier
    pub hostile_spawn_chance: f32,
    /// Session time before elites may appear (ms)
    pub elite_grace_ms: f64,
    /// Chance that an eligible spawn is an elite
    pub elite_chance: f32,

    // === Power-ups ===
    /// Minimum time between power-up spawns (ms)
    pub power_up_cooldown_ms: f64,
    /// Per-frame power-up spawn chance once the cooldown has elapsed
    pub power_up_chance: f32,
    pub health_restore: i32,
    pub repair_restore: i32,

    // === Scoring & damage ===
    pub hostile_score: u32,
    pub elite_score: u32,
    /// Health lost when a hostile slips past the bottom edge
    pub escape_penalty: i32,
    /// Health lost when a hostile rams the player
    pub ram_penalty: i32,

    // === Progression ===
    /// Score multiple that grants a level
    pub level_threshold: u32,
    pub player_speed: f32,
    pub fire_cooldown_ms: f64,
    pub fire_cooldown_step_ms: f64,
    pub fire_cooldown_floor_ms: f64,
    pub base_damage: f32,
    pub damage_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            collision_margin: 5.0,

            difficulty: 0.5,
            hostile_spawn_chance: 0.01,
            elite_grace_ms: 15_000.0,
            elite_chance: 0.2,

            power_up_cooldown_ms: 30_000.0,
            power_up_chance: 0.0005,
            health_restore: 30,
            repair_restore: 50,

            hostile_score: 10,
            elite_score: 50,
            escape_penalty: 10,
            ram_penalty: 20,

            level_threshold: 50,
            player_speed: 8.0,
            fire_cooldown_ms: 150.0,
            fire_cooldown_step_ms: 10.0,
            fire_cooldown_floor_ms: 100.0,
            base_damage: 1.0,
            damage_step: 0.5,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON object and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.collision_margin >= 0.0) {
            return Err(ConfigError::invalid(
                "collision_margin",
                "must be zero or positive",
            ));
        }
        if !(self.difficulty > 0.0) {
            return Err(ConfigError::invalid("difficulty", "must be positive"));
        }
        for (field, p) in [
            ("hostile_spawn_chance", self.hostile_spawn_chance),
            ("elite_chance", self.elite_chance),
            ("power_up_chance", self.power_up_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::invalid(field, format!("{p} is not a probability")));
            }
        }
        if self.level_threshold == 0 {
            return Err(ConfigError::invalid("level_threshold", "must be non-zero"));
        }
        for (field, ms) in [
            ("fire_cooldown_ms", self.fire_cooldown_ms),
            ("fire_cooldown_step_ms", self.fire_cooldown_step_ms),
            ("fire_cooldown_floor_ms", self.fire_cooldown_floor_ms),
        ] {
            if !(ms.is_finite() && ms >= 0.0) {
                return Err(ConfigError::invalid(field, format!("{ms} is not a duration")));
            }
        }
        if !(self.base_damage > 0.0) {
            return Err(ConfigError::invalid("base_damage", "must be positive"));
        }
        if !(self.damage_step >= 0.0) {
            return Err(ConfigError::invalid("damage_step", "must be zero or positive"));
        }
        for (field, amount) in [
            ("escape_penalty", self.escape_penalty),
            ("ram_penalty", self.ram_penalty),
            ("health_restore", self.health_restore),
            ("repair_restore", self.repair_restore),
        ] {
            if amount < 0 {
                return Err(ConfigError::invalid(field, "must be zero or positive"));
            }
        }
        if self.fire_cooldown_floor_ms > self.fire_cooldown_ms {
            return Err(ConfigError::invalid(
                "fire_cooldown_floor_ms",
                "must not exceed fire_cooldown_ms",
            ));
        }
        Ok(())
    }
}
