//! Detection of the hidden structural pattern among black cells.
//!
//! Small boards (`n < 6`) look for any two orthogonally adjacent black
//! cells. Larger boards look for an S or Z tetromino in any of its four
//! orientations.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::cell::Color;

/// Board size from which the tetromino rule replaces the adjacency rule.
pub const TETROMINO_MIN_SIZE: usize = 6;

/// Cell offsets `(row, col)` from the anchor of a two-cell domino.
const DOMINOES: [[(usize, usize); 2]; 2] = [
    // horizontal
    [(0, 0), (0, 1)],
    // vertical
    [(0, 0), (1, 0)],
];

/// Cell offsets `(row, col)` from the anchor of each S/Z tetromino.
const SZ_TETROMINOES: [[(usize, usize); 4]; 4] = [
    // horizontal S: .XX / XX.
    [(1, 0), (0, 1), (1, 1), (0, 2)],
    // horizontal Z: XX. / .XX
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    // vertical S: .X / XX / X.
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    // vertical Z: X. / XX / .X
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

/// Which pattern a board of a given size is checked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternRule {
    /// Two horizontally or vertically adjacent black cells.
    Adjacency,
    /// Four black cells forming an S or Z tetromino.
    SzTetromino,
}

impl PatternRule {
    /// The rule used for an `n×n` board.
    #[must_use]
    pub const fn for_size(n: usize) -> Self {
        if n < TETROMINO_MIN_SIZE {
            PatternRule::Adjacency
        } else {
            PatternRule::SzTetromino
        }
    }

    /// Whether `pieces` contains the pattern.
    ///
    /// Anchors are scanned in row-major order and the scan stops at the
    /// first fully black shape.
    #[must_use]
    pub fn detect(self, pieces: &Array2<Color>) -> bool {
        match self {
            PatternRule::Adjacency => contains_any(pieces, &DOMINOES),
            PatternRule::SzTetromino => contains_any(pieces, &SZ_TETROMINOES),
        }
    }
}

/// Whether the board built from `pieces` contains its size's pattern.
#[must_use]
pub fn exist_pattern(pieces: &Array2<Color>) -> bool {
    PatternRule::for_size(pieces.nrows()).detect(pieces)
}

fn contains_any<const K: usize>(pieces: &Array2<Color>, shapes: &[[(usize, usize); K]]) -> bool {
    let (rows, cols) = pieces.dim();
    for i in 0..rows {
        for j in 0..cols {
            for shape in shapes {
                let fits = shape.iter().all(|&(di, dj)| i + di < rows && j + dj < cols);
                if fits && shape.iter().all(|&(di, dj)| pieces[[i + di, j + dj]].is_black()) {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: usize, blacks: &[(usize, usize)]) -> Array2<Color> {
        let mut pieces = Array2::from_elem((n, n), Color::White);
        for &(r, c) in blacks {
            pieces[[r, c]] = Color::Black;
        }
        pieces
    }

    #[test]
    fn test_rule_selection() {
        assert_eq!(PatternRule::for_size(2), PatternRule::Adjacency);
        assert_eq!(PatternRule::for_size(5), PatternRule::Adjacency);
        assert_eq!(PatternRule::for_size(6), PatternRule::SzTetromino);
        assert_eq!(PatternRule::for_size(9), PatternRule::SzTetromino);
    }

    #[test]
    fn test_adjacency_vertical_pair() {
        let pieces = board(3, &[(0, 1), (1, 1)]);
        assert!(exist_pattern(&pieces));
        assert_eq!(exist_pattern(&pieces), exist_pattern(&pieces));
    }

    #[test]
    fn test_adjacency_horizontal_pair_on_last_row() {
        assert!(exist_pattern(&board(4, &[(3, 2), (3, 3)])));
    }

    #[test]
    fn test_adjacency_ignores_diagonals() {
        assert!(!exist_pattern(&board(3, &[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)])));
    }

    #[test]
    fn test_all_white() {
        assert!(!exist_pattern(&board(3, &[])));
        assert!(!exist_pattern(&board(6, &[])));
    }

    #[test]
    fn test_tetromino_orientations() {
        let n = 6;
        for shape in SZ_TETROMINOES {
            // Anchor in the middle of the board.
            let cells: Vec<_> = shape.iter().map(|&(r, c)| (r + 2, c + 2)).collect();
            assert!(exist_pattern(&board(n, &cells)), "missed {:?}", shape);
        }
    }

    #[test]
    fn test_vertical_tetromino_away_from_right_edge() {
        // Vertical Z anchored at the top-left corner.
        assert!(exist_pattern(&board(6, &[(0, 0), (1, 0), (1, 1), (2, 1)])));
    }

    #[test]
    fn test_tetromino_at_bottom_right() {
        // Horizontal Z touching the last row and column.
        assert!(exist_pattern(&board(6, &[(4, 3), (4, 4), (5, 4), (5, 5)])));
    }

    #[test]
    fn test_large_board_ignores_dominoes_and_other_tetrominoes() {
        // A domino is not enough on large boards.
        assert!(!exist_pattern(&board(6, &[(0, 0), (0, 1)])));
        // Square (O) tetromino.
        assert!(!exist_pattern(&board(6, &[(0, 0), (0, 1), (1, 0), (1, 1)])));
        // Straight (I) tetromino.
        assert!(!exist_pattern(&board(6, &[(3, 0), (3, 1), (3, 2), (3, 3)])));
        // L tetromino.
        assert!(!exist_pattern(&board(6, &[(0, 0), (1, 0), (2, 0), (2, 1)])));
    }
}
