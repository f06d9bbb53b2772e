//! Board model: ground truth, per-player masks and evidence, guesses.
//!
//! - `cell`: colors and coordinates
//! - `evidence`: report tallies and the black-belief estimate
//! - `pattern`: the adjacency / S-Z tetromino detector
//! - `state`: `BoardState`, the mutable entity one game works on

pub mod cell;
pub mod evidence;
pub mod pattern;
pub mod state;

pub use cell::{Color, Coord, ToNdIndex};
pub use evidence::{estimate, Evidence};
pub use pattern::{exist_pattern, PatternRule};
pub use state::{BoardState, CellView, Guess};
