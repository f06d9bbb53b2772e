//! Game bindings for Python.

use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{GameConfig, GameRng, Player};
use crate::games::pattern::PatternGame;
use crate::rules::Game;

use super::py_board::PyBoard;

/// Python wrapper for PatternGame.
///
/// Players are addressed as `1` and `-1`.
#[pyclass(name = "PatternGame")]
pub struct PyPatternGame {
    game: PatternGame,
}

#[pymethods]
impl PyPatternGame {
    /// Create a new PatternGame.
    ///
    /// # Arguments
    /// - n: Board dimension (at least 2)
    /// - black_ratio: Fraction of black cells on random boards
    /// - truthful_probability: Probability a query report is truthful
    /// - estimate_precision: Decimal digits of canonical estimates
    #[new]
    #[pyo3(signature = (
        n = 3,
        black_ratio = 0.22,
        truthful_probability = 0.7,
        estimate_precision = 3
    ))]
    fn new(n: usize, black_ratio: f64, truthful_probability: f64, estimate_precision: u32) -> PyResult<Self> {
        let config = GameConfig::new(n)
            .with_black_ratio(black_ratio)
            .with_truthful_probability(truthful_probability)
            .with_estimate_precision(estimate_precision);
        Ok(Self {
            game: PatternGame::new(config)?,
        })
    }

    /// Build a fresh board. Unseeded boards draw their seed from the OS.
    #[pyo3(name = "getInitBoard", signature = (seed = None))]
    fn get_init_board(&self, seed: Option<u64>) -> PyResult<PyBoard> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(PyBoard {
            state: self.game.init_board_with_rng(rng)?,
        })
    }

    /// Build a board with fixed pieces.
    #[pyo3(name = "boardFromPieces", signature = (pieces, seed = 0))]
    fn board_from_pieces(&self, pieces: PyReadonlyArray2<'_, u8>, seed: u64) -> PyResult<PyBoard> {
        let pieces = pieces.as_array().to_owned();
        Ok(PyBoard {
            state: self.game.init_board_from_pieces(&pieces, seed)?,
        })
    }

    #[pyo3(name = "getBoardSize")]
    fn get_board_size(&self) -> (usize, usize) {
        self.game.board_size()
    }

    #[pyo3(name = "getActionSize")]
    fn get_action_size(&self) -> usize {
        self.game.action_size()
    }

    #[pyo3(name = "getValidMoves")]
    fn get_valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: &PyBoard,
        player: i8,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let player = Player::from_value(player)?;
        Ok(self.game.valid_moves(&board.state, player)?.into_pyarray_bound(py))
    }

    /// Apply an action in place; returns the same board and the next player.
    #[pyo3(name = "getNextState")]
    fn get_next_state<'py>(
        &self,
        board: Bound<'py, PyBoard>,
        player: i8,
        action: usize,
    ) -> PyResult<(Bound<'py, PyBoard>, i8)> {
        let player = Player::from_value(player)?;
        let next = {
            let mut guard = board.borrow_mut();
            self.game.next_state(&mut guard.state, player, action)?
        };
        Ok((board, next.value()))
    }

    /// 0 while ongoing, 1 if player 1 won, -1 if player -1 won.
    #[pyo3(name = "getGameEnded")]
    fn get_game_ended(&self, board: &PyBoard, player: i8) -> PyResult<i8> {
        let player = Player::from_value(player)?;
        Ok(self.game.game_ended_value(&board.state, player))
    }

    #[pyo3(name = "getCanonicalForm")]
    fn get_canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: &PyBoard,
        player: i8,
    ) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let player = Player::from_value(player)?;
        Ok(self.game.canonical_form(&board.state, player).into_pyarray_bound(py))
    }

    #[pyo3(name = "getSymmetries")]
    fn get_symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, f64>,
        pi: Vec<f64>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<f64>>, Vec<f64>)>> {
        let board = board.as_array().to_owned();
        let forms = self.game.symmetries(&board, &pi)?;
        Ok(forms
            .into_iter()
            .map(|(b, p)| (b.into_pyarray_bound(py), p))
            .collect())
    }

    #[pyo3(name = "stringRepresentation")]
    fn string_representation<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, f64>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let board = board.as_array().to_owned();
        let key = self.game.string_representation(&board)?;
        Ok(PyBytes::new_bound(py, &key))
    }

    fn __repr__(&self) -> String {
        let (n, _) = self.game.board_size();
        format!("PatternGame(n={}, actions={})", n, self.game.action_size())
    }
}
