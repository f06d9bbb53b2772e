//! Python bindings for the find-pattern engine.
//!
//! The game is exposed under the method names Python self-play code
//! already expects (`getInitBoard`, `getValidMoves`, `getNextState`, ...),
//! with boards and views returned as NumPy arrays.
//!
//! # Quick Start
//!
//! ```python
//! import find_pattern as fp
//!
//! game = fp.PatternGame(n=3)
//! board = game.getInitBoard(seed=42)
//!
//! valid = game.getValidMoves(board, 1)
//! board, player = game.getNextState(board, 1, int(valid.nonzero()[0][0]))
//!
//! view = game.getCanonicalForm(board, 1)
//! key = game.stringRepresentation(view)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_board;
mod py_games;

pub use py_board::*;
pub use py_games::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Belief in `[0, 1]` that a cell is black given its report counts.
#[pyfunction]
#[pyo3(name = "estimate")]
fn py_estimate(white: u32, black: u32) -> f64 {
    crate::board::estimate(white, black)
}

/// find_pattern: a partial-information pattern guessing game for
/// AlphaZero-style training.
#[pymodule]
fn find_pattern(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyPatternGame>()?;
    m.add_function(wrap_pyfunction!(py_estimate, m)?)?;

    Ok(())
}
