//! Game interface and board symmetries.
//!
//! Games implement `Game` to expose:
//! - Legal actions for each state
//! - How actions modify state
//! - Win/loss conditions
//! - The player-relative canonical view
//!
//! Search and training code call into `Game` but never interpret
//! game-specific concepts directly.

pub mod engine;
pub mod symmetry;

pub use engine::{Game, GameResult, SymmetricForms};
pub use symmetry::{symmetric_forms, Symmetry};
