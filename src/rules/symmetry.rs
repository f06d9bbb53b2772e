//! Dihedral symmetries of the square board, for training-data augmentation.
//!
//! Each symmetry is a number of quarter turns counter-clockwise followed by
//! an optional left-right mirror. Board grids are permuted cell by cell.
//! Policies over probe actions are permuted by mapping both the discover
//! and the query coordinate through the same symmetry; the two guess
//! entries are invariant.

use ndarray::Array2;
use smallvec::SmallVec;

use crate::board::{Coord, ToNdIndex};
use crate::core::{ActionCodec, GameError, Move, Result};

/// One element of the dihedral group of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symmetry {
    /// Quarter turns counter-clockwise (1 to 4, where 4 is the identity turn).
    pub rotations: u8,
    /// Mirror left-right after rotating.
    pub flip: bool,
}

impl Symmetry {
    /// All eight symmetries, in the order augmented samples are produced.
    #[must_use]
    pub fn all() -> [Symmetry; 8] {
        let mut out = [Symmetry { rotations: 4, flip: false }; 8];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = Symmetry {
                rotations: (i / 2 + 1) as u8,
                flip: i % 2 == 0,
            };
        }
        out
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rotations % 4 == 0 && !self.flip
    }

    /// Where the cell at `coord` lands on an `n×n` board.
    #[must_use]
    pub fn map_coord(&self, coord: Coord, n: usize) -> Coord {
        let (mut r, mut c) = coord;
        for _ in 0..self.rotations % 4 {
            (r, c) = (n - 1 - c, r);
        }
        if self.flip {
            c = n - 1 - c;
        }
        (r, c)
    }

    /// Permute a square grid.
    #[must_use]
    pub fn apply_grid<T: Clone>(&self, grid: &Array2<T>) -> Array2<T> {
        let n = grid.nrows();
        let mut out = grid.clone();
        for (coord, value) in grid.indexed_iter() {
            out[self.map_coord(coord, n).to_nd_index()] = value.clone();
        }
        out
    }

    /// Permute a policy vector of length `n⁴ + 2`.
    pub fn apply_policy(&self, codec: &ActionCodec, policy: &[f64]) -> Result<Vec<f64>> {
        check_policy_len(codec, policy)?;
        let n = codec.board_size();
        let mut out = policy.to_vec();
        for (action, &p) in policy.iter().enumerate().take(codec.probe_count()) {
            if let Move::Probe { discover, query } = codec.decode(action)? {
                let mapped = Move::Probe {
                    discover: self.map_coord(discover, n),
                    query: self.map_coord(query, n),
                };
                out[codec.encode(mapped)?] = p;
            }
        }
        Ok(out)
    }
}

/// All eight symmetric `(board, policy)` pairs.
///
/// The trailing two guess probabilities of every variant equal the input's.
pub fn symmetric_forms(
    codec: &ActionCodec,
    board: &Array2<f64>,
    policy: &[f64],
) -> Result<SmallVec<[(Array2<f64>, Vec<f64>); 8]>> {
    check_policy_len(codec, policy)?;
    let (rows, cols) = board.dim();
    if rows != codec.board_size() || cols != codec.board_size() {
        return Err(GameError::InvalidBoardShape { rows, cols });
    }
    Symmetry::all()
        .iter()
        .map(|sym| -> Result<_> { Ok((sym.apply_grid(board), sym.apply_policy(codec, policy)?)) })
        .collect()
}

fn check_policy_len(codec: &ActionCodec, policy: &[f64]) -> Result<()> {
    if policy.len() == codec.action_size() {
        Ok(())
    } else {
        Err(GameError::InvalidPolicyLength {
            expected: codec.action_size(),
            actual: policy.len(),
        })
    }
}
