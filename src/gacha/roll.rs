//! Injectable sources of uniform rolls in `[0, 1)`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand out uniform `f64`s in `[0, 1)`.
pub trait RollSource {
    fn roll(&mut self) -> f64;
}

/// Production source backed by a seeded [`SmallRng`].
pub struct SeededRolls {
    rng: SmallRng,
}

impl SeededRolls {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RollSource for SeededRolls {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of rolls, then repeats the last one.
#[cfg(test)]
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub fn new(rolls: &[f64]) -> Self {
        assert!(!rolls.is_empty(), "ScriptedRolls needs at least one roll");
        Self {
            rolls: rolls.to_vec(),
            pos: 0,
        }
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        let r = self.rolls[self.pos.min(self.rolls.len() - 1)];
        self.pos += 1;
        r
    }
}
