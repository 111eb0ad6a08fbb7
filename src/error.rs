//! Error taxonomy for grid construction, cell access, and path reconstruction.

use std::{
    error,
    fmt::{self, Display, Formatter},
};

/// Failure conditions reported by the maze core.
///
/// This enumeration covers the few precondition violations the core can hit. Everything else is
/// a normal outcome: in particular, a search that drains its queue without reaching the goal is
/// not an error by itself, it only becomes [`MazeError::UnreachableGoal`] once the caller asks
/// for the reconstructed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A grid was requested with a zero dimension.
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// Path reconstruction was requested but the search never reached the end cell.
    UnreachableGoal {
        /// Row of the unreached end cell.
        row: usize,
        /// Column of the unreached end cell.
        col: usize,
    },
    /// A cell coordinate outside the grid was passed to an operation that requires bounds.
    OutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },
}

impl Display for MazeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(fmt, "invalid grid dimensions {rows}x{cols}: both dimensions must be at least 1")
            }
            Self::UnreachableGoal { row, col } => {
                write!(fmt, "end cell ({row}, {col}) was never reached by the search")
            }
            Self::OutOfBounds { row, col } => {
                write!(fmt, "cell ({row}, {col}) lies outside the grid")
            }
        }
    }
}

impl error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_dimensions() {
        let error = MazeError::InvalidDimensions { rows: 0, cols: 5 };
        assert_eq!(
            error.to_string(),
            "invalid grid dimensions 0x5: both dimensions must be at least 1"
        );
    }

    #[test]
    fn test_display_unreachable_goal() {
        let error = MazeError::UnreachableGoal { row: 3, col: 4 };
        assert_eq!(
            error.to_string(),
            "end cell (3, 4) was never reached by the search"
        );
    }

    #[test]
    fn test_display_out_of_bounds() {
        let error = MazeError::OutOfBounds { row: 9, col: 0 };
        assert_eq!(error.to_string(), "cell (9, 0) lies outside the grid");
    }
}
