//! Engine error type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Board size {0} is too small, at least 2 is required")]
    BoardTooSmall(usize),
    #[error("Board size {0} overflows the action space")]
    ActionSpaceOverflow(usize),
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("Estimate precision {digits} exceeds the maximum of {max} digits")]
    PrecisionTooHigh { digits: u32, max: u32 },
    #[error("Board must be square, got {rows}x{cols}")]
    InvalidBoardShape { rows: usize, cols: usize },
    #[error("Cell value must be 0 or 1, got {0}")]
    InvalidCellValue(u8),
    #[error("Action {action} is outside the action space of size {action_size}")]
    InvalidAction { action: usize, action_size: usize },
    #[error("State is {actual}x{actual} but the game plays on {expected}x{expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },
    #[error("Coordinate ({0}, {1}) is outside the board")]
    InvalidCoord(usize, usize),
    #[error("Player value must be 1 or -1, got {0}")]
    InvalidPlayer(i8),
    #[error("Policy must have {expected} entries, got {actual}")]
    InvalidPolicyLength { expected: usize, actual: usize },
    #[error("Serialization failed: {0}")]
    Encoding(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        GameError::Encoding(err.to_string())
    }
}
