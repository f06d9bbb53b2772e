//! The pattern guessing game.
//!
//! Two players share an `n×n` board of white and black cells that neither
//! sees directly:
//! - The board starts split between the players' masks
//! - On your turn: take a cell away from your opponent's mask and ask for
//!   a noisy report (70% truthful by default) on a cell in your own mask
//! - Or guess whether the black cells contain the pattern, which ends the
//!   game
//!
//! The pattern is two adjacent black cells on boards below `6×6`, and an
//! S or Z tetromino on larger boards.

mod game;

pub use game::{PatternGame, PatternGameBuilder};
