//! Board bindings for Python.

use ndarray::Array3;
use numpy::{IntoPyArray, PyArray2, PyArray3};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::board::BoardState;
use crate::core::Player;

/// Python wrapper for BoardState.
///
/// The object is mutated in place by `PatternGame.getNextState`.
#[pyclass(name = "Board")]
pub struct PyBoard {
    pub(crate) state: BoardState,
}

#[pymethods]
impl PyBoard {
    /// Board dimension `n`.
    #[getter]
    fn n(&self) -> usize {
        self.state.size()
    }

    /// Ground truth as a `n×n` array of 0 (white) / 1 (black).
    #[getter]
    fn pieces<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<u8>> {
        self.state.piece_values().into_pyarray_bound(py)
    }

    /// Whether the pieces contain the pattern (the `case` flag).
    #[getter]
    fn pattern(&self) -> bool {
        self.state.has_pattern()
    }

    /// A player's mask as 0/1 values.
    fn mask<'py>(&self, py: Python<'py>, player: i8) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let player = Player::from_value(player)?;
        Ok(self.state.mask(player).mapv(u8::from).into_pyarray_bound(py))
    }

    /// A player's evidence as an `n×n×2` array of (white, black) counts.
    fn evidence<'py>(&self, py: Python<'py>, player: i8) -> PyResult<Bound<'py, PyArray3<u32>>> {
        let player = Player::from_value(player)?;
        let table = self.state.evidence(player);
        let n = self.state.size();
        let counts = Array3::from_shape_fn((n, n, 2), |(r, c, k)| {
            let cell = table[[r, c]];
            if k == 0 {
                cell.white
            } else {
                cell.black
            }
        });
        Ok(counts.into_pyarray_bound(py))
    }

    /// A player's guess: 0 undecided, 1 pattern, -1 no pattern.
    fn guess(&self, player: i8) -> PyResult<i8> {
        let player = Player::from_value(player)?;
        Ok(self.state.guess(player).value())
    }

    /// Black cells revealed to `player` minus those revealed to the opponent.
    #[pyo3(name = "countDiff")]
    fn count_diff(&self, player: i8) -> PyResult<i64> {
        let player = Player::from_value(player)?;
        Ok(self.state.black_count_difference(player))
    }

    /// Copy the board for simulation, with an independent RNG branch.
    fn copy(&mut self) -> Self {
        Self {
            state: self.state.clone_state(),
        }
    }

    /// Checkpoint the board, RNG position included.
    #[pyo3(name = "toBytes")]
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        Ok(PyBytes::new_bound(py, &self.state.to_bytes()?))
    }

    /// Restore a board written by `toBytes`.
    #[staticmethod]
    #[pyo3(name = "fromBytes")]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Ok(Self {
            state: BoardState::from_bytes(bytes)?,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(n={}, pattern={}, guesses=({}, {}))",
            self.state.size(),
            self.state.has_pattern(),
            self.state.guess(Player::A).value(),
            self.state.guess(Player::B).value()
        )
    }
}
