use thiserror::Error;

use crate::WIDTH;

/// Rule violations reported by a board
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column + 1, WIDTH)]
    ColumnOutOfRange { column: usize },
    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },
    #[error("Invalid move, a piece must have a color")]
    EmptyPiece,
    #[error("Invalid position, game is over")]
    GameOver,
    #[error("could not parse '{0}' as a valid move")]
    Parse(String),
}

/// Failures of the move search
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("connected run of length {length} is outside the coefficient table")]
    HeuristicRange { length: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}
