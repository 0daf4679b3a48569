//! Gameplay randomness
//!
//! Spawning draws every random number through `Randomness` so a run is
//! reproducible from its seed and tests can script exact rolls.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform rolls in `[0, 1)`
pub trait Randomness {
    fn roll(&mut self) -> f32;

    /// Uniform value in `[lo, hi)`
    fn roll_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.roll() * (hi - lo)
    }
}

impl Randomness for Pcg32 {
    fn roll(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG stream used for live play
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// A fixed roll sequence, repeated once exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: Vec<f32>,
    cursor: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl Into<Vec<f32>>) -> Self {
        let rolls = rolls.into();
        assert!(!rolls.is_empty(), "scripted rolls need at least one value");
        Self { rolls, cursor: 0 }
    }

    /// Every roll returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Randomness for ScriptedRolls {
    fn roll(&mut self) -> f32 {
        let value = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        value
    }
}
