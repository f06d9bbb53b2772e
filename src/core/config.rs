//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game instance that is not drawn
//! at random: the board dimension, how many pieces are black on a random
//! board, how reliable a query report is, and how canonical estimates are
//! rounded.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 3;

/// Default fraction of black pieces on a random board.
pub const DEFAULT_BLACK_RATIO: f64 = 0.22;

/// Default probability that a query reports the true color.
pub const DEFAULT_TRUTHFUL_PROBABILITY: f64 = 0.7;

/// Default number of decimal digits kept in canonical estimates.
pub const DEFAULT_ESTIMATE_PRECISION: u32 = 3;

/// Largest supported estimate precision. An `f64` carries about 15
/// significant decimal digits.
pub const MAX_ESTIMATE_PRECISION: u32 = 15;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension `n` (the board is `n×n`).
    pub size: usize,

    /// Fraction of cells that are black on a randomly generated board.
    /// The black count is `⌈n²·black_ratio⌉`.
    pub black_ratio: f64,

    /// Probability that a query move reports the queried cell's true color.
    pub truthful_probability: f64,

    /// Decimal digits kept when rounding estimates in the canonical form,
    /// at most [`MAX_ESTIMATE_PRECISION`].
    pub estimate_precision: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            black_ratio: DEFAULT_BLACK_RATIO,
            truthful_probability: DEFAULT_TRUTHFUL_PROBABILITY,
            estimate_precision: DEFAULT_ESTIMATE_PRECISION,
        }
    }
}

impl GameConfig {
    /// Create a configuration for an `n×n` board with default parameters.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the fraction of black pieces.
    #[must_use]
    pub fn with_black_ratio(mut self, ratio: f64) -> Self {
        self.black_ratio = ratio;
        self
    }

    /// Set the probability of a truthful report.
    #[must_use]
    pub fn with_truthful_probability(mut self, probability: f64) -> Self {
        self.truthful_probability = probability;
        self
    }

    /// Set the rounding precision of canonical estimates.
    #[must_use]
    pub fn with_estimate_precision(mut self, digits: u32) -> Self {
        self.estimate_precision = digits;
        self
    }

    /// Number of cells on the board (`n²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of black pieces placed on a random board.
    #[must_use]
    pub fn black_count(&self) -> usize {
        let cells = self.cell_count();
        ((cells as f64 * self.black_ratio).ceil() as usize).min(cells)
    }

    /// Check that the configuration describes a playable game.
    ///
    /// A board below `2×2` cannot be split between two players so that
    /// both have a discover/query pair.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(GameError::BoardTooSmall(self.size));
        }
        self.size
            .checked_pow(4)
            .and_then(|moves| moves.checked_add(2))
            .ok_or(GameError::ActionSpaceOverflow(self.size))?;
        check_probability("black_ratio", self.black_ratio)?;
        check_probability("truthful_probability", self.truthful_probability)?;
        if self.estimate_precision > MAX_ESTIMATE_PRECISION {
            return Err(GameError::PrecisionTooHigh {
                digits: self.estimate_precision,
                max: MAX_ESTIMATE_PRECISION,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidProbability { name, value })
    }
}
