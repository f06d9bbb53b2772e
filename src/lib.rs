//! # find-pattern
//!
//! A two-player, partial-information guessing game engine for RL/MCTS
//! training.
//!
//! Each player sees part of an `n×n` board of white and black cells and
//! collects noisy reports about the rest. The game ends when a player
//! guesses whether the black cells contain a structural pattern.
//!
//! ## Design Principles
//!
//! 1. **Fixed Interface**: Search and training code use the `Game` trait
//!    only: initial state, action space, legal moves, transition, result,
//!    canonical view, symmetries and hash key.
//!
//! 2. **Injected Randomness**: Every random draw of a game comes from the
//!    seeded `GameRng` owned by its `BoardState`, so games replay exactly.
//!
//! 3. **In-Place Transitions**: A `BoardState` belongs to one game and is
//!    mutated by each move. `BoardState::clone_state` copies it for
//!    simulations.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, move encoding, errors
//! - `board`: Ground truth, masks, evidence, pattern detection
//! - `rules`: The `Game` trait, results and board symmetries
//! - `games`: The pattern game itself
//!
//! ## Example
//!
//! ```
//! use find_pattern::{Game, PatternGameBuilder, Player};
//!
//! let game = PatternGameBuilder::new().size(3).build().unwrap();
//! let mut state = game.init_board_seeded(42).unwrap();
//!
//! let action = game.legal_actions(&state, Player::A).unwrap()[0];
//! let next = game.next_state(&mut state, Player::A, action).unwrap();
//! assert_eq!(next, Player::B);
//!
//! let view = game.canonical_form(&state, Player::A);
//! assert_eq!(view.dim(), (3, 3));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionCodec, GameConfig, GameError, GameRng, GameRngState, Move, Player, PlayerMap, Result,
};

pub use crate::board::{estimate, exist_pattern, BoardState, CellView, Color, Coord, Evidence, Guess, PatternRule};

pub use crate::rules::{Game, GameResult, SymmetricForms, Symmetry};

pub use crate::games::pattern::{PatternGame, PatternGameBuilder};
