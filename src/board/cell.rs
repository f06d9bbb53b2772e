//! Cell colors and board coordinates.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Board coordinate `(row, col)`.
pub type Coord = (usize, usize);

/// Conversion of a coordinate into an `ndarray` index.
pub trait ToNdIndex {
    fn to_nd_index(self) -> [usize; 2];
}

impl ToNdIndex for Coord {
    fn to_nd_index(self) -> [usize; 2] {
        [self.0, self.1]
    }
}

/// Ground-truth color of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Numeric value: `0` for white, `1` for black.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// The other color.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Color::White),
            1 => Ok(Color::Black),
            other => Err(GameError::InvalidCellValue(other)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
