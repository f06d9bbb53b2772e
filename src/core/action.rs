//! Moves and their integer action encoding.
//!
//! A move is either a probe, which pairs a cell to discover (taken away
//! from the opponent's mask) with a cell to query (a noisy color report
//! for the mover), or one of the two final guesses.
//!
//! On an `n×n` board the action space has `n⁴ + 2` entries. Probes occupy
//! `0..n⁴`, read as the base-`n` digits
//! `discover.row, discover.col, query.row, query.col`; `n⁴` is "guess
//! pattern" and `n⁴ + 1` is "guess no pattern".
//!
//! ```
//! use find_pattern::core::{ActionCodec, Move};
//!
//! let codec = ActionCodec::new(3).unwrap();
//! assert_eq!(codec.action_size(), 83);
//!
//! let probe = Move::Probe { discover: (1, 2), query: (0, 1) };
//! let action = codec.encode(probe).unwrap();
//! assert_eq!(action, 27 + 2 * 9 + 1);
//! assert_eq!(codec.decode(action).unwrap(), probe);
//! assert_eq!(codec.decode(81).unwrap(), Move::GuessPattern);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::board::Coord;

/// A symbolic move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Clear the opponent's mask at `discover` and query `query`.
    Probe { discover: Coord, query: Coord },
    /// Declare that the pattern is present.
    GuessPattern,
    /// Declare that the pattern is absent.
    GuessNoPattern,
}

impl Move {
    #[must_use]
    pub const fn is_guess(&self) -> bool {
        matches!(self, Move::GuessPattern | Move::GuessNoPattern)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Probe { discover, query } => write!(
                f,
                "discover ({}, {}) query ({}, {})",
                discover.0, discover.1, query.0, query.1
            ),
            Move::GuessPattern => write!(f, "guess pattern"),
            Move::GuessNoPattern => write!(f, "guess no pattern"),
        }
    }
}

/// Bidirectional mapping between action indices and moves for one board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCodec {
    n: usize,
    probes: usize,
}

impl ActionCodec {
    /// Create the codec for an `n×n` board.
    pub fn new(n: usize) -> Result<Self> {
        let probes = n
            .checked_pow(4)
            .filter(|probes| probes.checked_add(2).is_some())
            .ok_or(GameError::ActionSpaceOverflow(n))?;
        Ok(Self { n, probes })
    }

    /// Board dimension.
    #[must_use]
    pub const fn board_size(&self) -> usize {
        self.n
    }

    /// Number of probe actions (`n⁴`).
    #[must_use]
    pub const fn probe_count(&self) -> usize {
        self.probes
    }

    /// Total number of actions (`n⁴ + 2`).
    #[must_use]
    pub const fn action_size(&self) -> usize {
        self.probes + 2
    }

    /// Action index of "guess pattern".
    #[must_use]
    pub const fn guess_pattern_action(&self) -> usize {
        self.probes
    }

    /// Action index of "guess no pattern".
    #[must_use]
    pub const fn guess_no_pattern_action(&self) -> usize {
        self.probes + 1
    }

    /// Decode an action index.
    pub fn decode(&self, action: usize) -> Result<Move> {
        let n = self.n;
        match action {
            a if a < self.probes => {
                let (n2, n3) = (n * n, n * n * n);
                Ok(Move::Probe {
                    discover: (a / n3, (a % n3) / n2),
                    query: ((a % n2) / n, a % n),
                })
            }
            a if a == self.probes => Ok(Move::GuessPattern),
            a if a == self.probes + 1 => Ok(Move::GuessNoPattern),
            _ => Err(GameError::InvalidAction {
                action,
                action_size: self.action_size(),
            }),
        }
    }

    /// Encode a move as its action index.
    pub fn encode(&self, mv: Move) -> Result<usize> {
        match mv {
            Move::Probe { discover, query } => {
                let n = self.n;
                for (row, col) in [discover, query] {
                    if row >= n || col >= n {
                        return Err(GameError::InvalidCoord(row, col));
                    }
                }
                Ok(self.probe_action(discover, query))
            }
            Move::GuessPattern => Ok(self.guess_pattern_action()),
            Move::GuessNoPattern => Ok(self.guess_no_pattern_action()),
        }
    }

    /// Action index of a probe whose coordinates are known to be on the board.
    #[must_use]
    pub(crate) fn probe_action(&self, discover: Coord, query: Coord) -> usize {
        let n = self.n;
        ((discover.0 * n + discover.1) * n + query.0) * n + query.1
    }
}
