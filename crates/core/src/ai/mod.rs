//! Greedy random move selection for the computer player

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{Board, Side};
use crate::error::{Error, Result};
use crate::rules::{generate, Move};

/// Picks a move for `side`: a random capture when one exists, otherwise
/// any random candidate. `None` when the side has no candidates at all.
pub fn choose_ai_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    choose_from(&generate(board, side), rng)
}

/// Captures-first random choice over an already generated candidate list
pub fn choose_from<R: Rng + ?Sized>(candidates: &[Move], rng: &mut R) -> Option<Move> {
    let captures: Vec<&Move> = candidates.iter().filter(|mv| mv.is_capture()).collect();
    if let Some(mv) = captures.choose(rng) {
        return Some((*mv).clone());
    }
    candidates.choose(rng).cloned()
}

/// Range for the artificial "thinking" pause before an AI move is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ThinkDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self> {
        let delay = Self { min_ms, max_ms };
        delay.validate()?;
        Ok(delay)
    }

    /// No pause at all
    pub fn instant() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_ms > self.max_ms {
            return Err(Error::Config(format!(
                "think delay min {}ms exceeds max {}ms",
                self.min_ms, self.max_ms
            )));
        }
        Ok(())
    }

    /// Uniform draw from `[min_ms, max_ms]`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.random_range(self.min_ms..=self.max_ms))
    }
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 2000,
        }
    }
}
