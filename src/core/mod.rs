//! Core engine types: players, RNG, configuration, moves, errors.
//!
//! This module contains the building blocks shared by the board model,
//! the rules interface and the game itself.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionCodec, Move};
pub use config::{GameConfig, MAX_ESTIMATE_PRECISION};
pub use error::{GameError, Result};
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
