//! Board construction errors.

use std::error::Error;
use std::fmt;

/// Errors from [`BoardConfig`](crate::BoardConfig) validation.
///
/// Construction-time failures only: a built board has no fallible
/// operations (a collision is a game event, not an error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A board dimension is zero or negative.
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// The configured item populations do not leave a free cell.
    Overcrowded {
        /// Cells demanded by obstacles, mice, turbo, and teleporters.
        occupied: usize,
        /// Total cells on the board.
        cells: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "board dimensions must be positive, got {width}x{height}")
            }
            Self::Overcrowded { occupied, cells } => {
                write!(
                    f,
                    "item populations need {occupied} cells but the board has only {cells}"
                )
            }
        }
    }
}

impl Error for BoardError {}
