use std::error::Error;
use std::fmt;

/// Errors from board construction and checked coordinate access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BoardError {
    /// Cell storage for a rows x cols board could not be allocated.
    AllocationFailed { rows: usize, cols: usize },
    /// A coordinate fell outside the board.
    CoordOutOfBounds {
        y: usize,
        x: usize,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { rows, cols } => {
                write!(f, "failed to allocate a {rows}x{cols} board")
            }
            Self::CoordOutOfBounds { y, x, rows, cols } => {
                write!(f, "coordinate ({y}, {x}) outside [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for BoardError {}
