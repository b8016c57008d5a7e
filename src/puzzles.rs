use crate::board::Board;
use crate::error::PuzzleError;
use std::fs;

/// A collection of puzzle boards parsed from text.
#[derive(Debug)]
pub struct Puzzles {
    boards: Vec<Board>,
}

impl Puzzles {
    /// Parse boards from text.
    ///
    /// Each board is a block of lines with whitespace-separated tile values
    /// (`.` or `0` for the blank). Boards are separated by empty lines;
    /// lines starting with `;` are comments/separators.
    pub fn from_text(contents: &str) -> Result<Self, PuzzleError> {
        let mut boards = Vec::new();
        let mut current_board = String::new();

        for line in contents.lines() {
            // Skip comment lines (board separators)
            if line.trim_start().starts_with(';') {
                if !current_board.is_empty() {
                    boards.push(Board::from_text(&current_board)?);
                    current_board.clear();
                }
                continue;
            }

            if line.trim().is_empty() {
                // Empty line within a board - end of board
                if !current_board.is_empty() {
                    boards.push(Board::from_text(&current_board)?);
                    current_board.clear();
                }
                continue;
            }

            current_board.push_str(line);
            current_board.push('\n');
        }

        // Don't forget the last board if the text doesn't end with an empty line
        if !current_board.is_empty() {
            boards.push(Board::from_text(&current_board)?);
        }

        Ok(Puzzles { boards })
    }

    /// Parse boards from a text file.
    pub fn from_file(path: &str) -> Result<Self, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth board (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Get the number of boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }
}
