use std::fmt;
use std::io;

/// Error type for puzzle construction and solving.
#[derive(Debug)]
pub enum PuzzleError {
    /// IO error when reading from file
    Io(io::Error),
    /// Board failed validation (not square, bad dimension, bad tile values)
    InvalidBoard(String),
    /// Heuristic selector outside the defined set
    InvalidHeuristic(u8),
    /// Initial and goal boards have different dimensions
    SizeMismatch { initial: usize, goal: usize },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Io(err) => write!(f, "IO error: {}", err),
            PuzzleError::InvalidBoard(msg) => write!(f, "Invalid board: {}", msg),
            PuzzleError::InvalidHeuristic(index) => {
                write!(f, "Invalid heuristic selector: {}", index)
            }
            PuzzleError::SizeMismatch { initial, goal } => write!(
                f,
                "Initial board is {0}x{0} but goal board is {1}x{1}",
                initial, goal
            ),
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(err: io::Error) -> Self {
        PuzzleError::Io(err)
    }
}

impl From<String> for PuzzleError {
    fn from(err: String) -> Self {
        PuzzleError::InvalidBoard(err)
    }
}
