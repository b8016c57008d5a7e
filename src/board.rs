use crate::error::PuzzleError;
use arrayvec::ArrayVec;
use std::fmt;

/// Tile values are stored as u8, so boards are capped at 16x16 (255 tiles).
pub const MAX_SIZE: usize = 16;
pub const MIN_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Offset as (row delta, column delta).
    fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

/// An NxN sliding-tile board. Tiles hold each value in 0..N*N exactly once,
/// with 0 denoting the blank cell. Boards are immutable once constructed;
/// every move produces a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    // Row-major tile values
    tiles: Vec<u8>,
    // Cached (row, col) of the blank; always consistent with tiles
    blank: (u8, u8),
}

impl Board {
    /// Build a board from row-major tile values, validating the grid:
    /// dimension within 2..=16 and each value in 0..size*size present
    /// exactly once.
    pub fn from_row_major(size: usize, tiles: Vec<u8>) -> Result<Self, PuzzleError> {
        if size < MIN_SIZE {
            return Err(PuzzleError::InvalidBoard(format!(
                "Board dimension {} is below the minimum of {}",
                size, MIN_SIZE
            )));
        }
        if size > MAX_SIZE {
            return Err(PuzzleError::InvalidBoard(format!(
                "Board dimension {} exceeds maximum size {}",
                size, MAX_SIZE
            )));
        }

        let cells = size * size;
        if tiles.len() != cells {
            return Err(PuzzleError::InvalidBoard(format!(
                "Expected {} tiles for a {}x{} board, found {}",
                cells,
                size,
                size,
                tiles.len()
            )));
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let value = tile as usize;
            if value >= cells {
                return Err(PuzzleError::InvalidBoard(format!(
                    "Tile value {} is out of range for a {}x{} board",
                    value, size, size
                )));
            }
            if seen[value] {
                return Err(PuzzleError::InvalidBoard(format!(
                    "Duplicate tile value {}",
                    value
                )));
            }
            seen[value] = true;
        }

        // Every value 0..cells appears exactly once, so the blank exists
        let blank_index = tiles.iter().position(|&t| t == 0).unwrap();
        let blank = ((blank_index / size) as u8, (blank_index % size) as u8);

        Ok(Board {
            size: size as u8,
            tiles,
            blank,
        })
    }

    /// Build a board from an explicit NxN grid of rows.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self, PuzzleError> {
        let size = grid.len();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != size {
                return Err(PuzzleError::InvalidBoard(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    size
                )));
            }
        }
        let tiles = grid.iter().flatten().copied().collect();
        Self::from_row_major(size, tiles)
    }

    /// Parse a board from text: one row per line, tiles separated by
    /// whitespace, with `.` accepted for the blank.
    ///
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// 7 8 .
    /// ```
    pub fn from_text(text: &str) -> Result<Self, PuzzleError> {
        let mut grid = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let tile = if token == "." {
                    0
                } else {
                    token.parse::<u8>().map_err(|_| {
                        PuzzleError::InvalidBoard(format!("Invalid tile '{}'", token))
                    })?
                };
                row.push(tile);
            }
            grid.push(row);
        }

        if grid.is_empty() {
            return Err(PuzzleError::InvalidBoard("Empty board".to_string()));
        }
        Self::from_grid(&grid)
    }

    /// The canonical goal board: tiles 1..N*N in row-major order with the
    /// blank in the bottom-right corner.
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            // Reuse the dimension errors from from_row_major
            return Self::from_row_major(size, Vec::new());
        }
        // cells may be 256, which u8 cannot count to: map from usize
        let cells = size * size;
        let mut tiles: Vec<u8> = (1..cells).map(|value| value as u8).collect();
        tiles.push(0);
        Ok(Board {
            size: size as u8,
            tiles,
            blank: ((size - 1) as u8, (size - 1) as u8),
        })
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn tile(&self, row: u8, col: u8) -> u8 {
        self.tiles[row as usize * self.size as usize + col as usize]
    }

    /// (row, col) of the blank cell.
    pub fn blank(&self) -> (u8, u8) {
        self.blank
    }

    /// Slide the blank one cell in the given direction, swapping it with the
    /// neighboring tile. Returns None if the move leaves the board.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let (dr, dc) = dir.delta();
        let new_row = self.blank.0 as i32 + dr as i32;
        let new_col = self.blank.1 as i32 + dc as i32;

        if new_row < 0 || new_col < 0 || new_row >= self.size as i32 || new_col >= self.size as i32
        {
            return None;
        }

        let size = self.size as usize;
        let from = self.blank.0 as usize * size + self.blank.1 as usize;
        let to = new_row as usize * size + new_col as usize;

        let mut tiles = self.tiles.clone();
        tiles.swap(from, to);

        Some(Board {
            size: self.size,
            tiles,
            blank: (new_row as u8, new_col as u8),
        })
    }

    /// All boards reachable by sliding the blank one cell. Between 2 and 4
    /// results, in fixed up, down, left, right order.
    pub fn successors(&self) -> ArrayVec<Board, 4> {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.slide(dir))
            .collect()
    }

    /// Whether the goal board is reachable from this one by blank slides.
    ///
    /// Each slide transposes the blank with one tile, flipping the parity of
    /// the permutation mapping this board onto the goal, and changes the
    /// blank's taxicab distance to its goal cell by one. Reachable if and
    /// only if the two parities agree.
    pub fn solvable_to(&self, goal: &Board) -> bool {
        if self.size != goal.size {
            return false;
        }

        let cells = self.tiles.len();
        let mut goal_index = vec![0usize; cells];
        for (index, &tile) in goal.tiles.iter().enumerate() {
            goal_index[tile as usize] = index;
        }

        let perm: Vec<usize> = self
            .tiles
            .iter()
            .map(|&tile| goal_index[tile as usize])
            .collect();

        // Parity from cycle decomposition: a cycle of length L needs L-1 swaps
        let mut visited = vec![false; cells];
        let mut transpositions = 0usize;
        for start in 0..cells {
            if visited[start] {
                continue;
            }
            let mut cycle_len = 0usize;
            let mut index = start;
            while !visited[index] {
                visited[index] = true;
                index = perm[index];
                cycle_len += 1;
            }
            transpositions += cycle_len - 1;
        }

        let blank_dist = (self.blank.0 as i32 - goal.blank.0 as i32).unsigned_abs()
            + (self.blank.1 as i32 - goal.blank.1 as i32).unsigned_abs();

        transpositions % 2 == blank_dist as usize % 2
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = format!("{}", self.tiles.len() - 1).len();
        let size = self.size as usize;
        for row in 0..size {
            let mut line = String::new();
            for col in 0..size {
                if col > 0 {
                    line.push(' ');
                }
                let tile = self.tiles[row * size + col];
                if tile == 0 {
                    line.push_str(&format!("{:>width$}", '.'));
                } else {
                    line.push_str(&format!("{:>width$}", tile));
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3(rows: [[u8; 3]; 3]) -> Board {
        let grid: Vec<Vec<u8>> = rows.iter().map(|r| r.to_vec()).collect();
        Board::from_grid(&grid).unwrap()
    }

    #[test]
    fn test_from_grid_basic() {
        let board = board_3x3([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(board.size(), 3);
        assert_eq!(board.blank(), (2, 1));
        assert_eq!(board.tile(0, 0), 1);
        assert_eq!(board.tile(2, 2), 8);
    }

    #[test]
    fn test_from_grid_not_square() {
        let grid = vec![vec![1, 2, 3], vec![4, 5], vec![7, 0, 8]];
        assert!(Board::from_grid(&grid).is_err());
    }

    #[test]
    fn test_from_grid_duplicate_value() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 7, 0]];
        let result = Board::from_grid(&grid);
        assert!(matches!(result, Err(PuzzleError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_grid_value_out_of_range() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 9, 0]];
        assert!(Board::from_grid(&grid).is_err());
    }

    #[test]
    fn test_from_grid_missing_blank() {
        // No zero anywhere: 9 is out of range for 3x3, and replacing the
        // blank with a duplicate also fails
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 8]];
        assert!(Board::from_grid(&grid).is_err());
    }

    #[test]
    fn test_dimension_limits() {
        assert!(Board::from_row_major(1, vec![0]).is_err());
        assert!(Board::from_row_major(17, (0..=255).collect()).is_err());
        let tiles: Vec<u8> = (0..4).collect();
        assert!(Board::from_row_major(2, tiles).is_ok());
    }

    #[test]
    fn test_from_text() {
        let board = Board::from_text("1 2 3\n4 5 6\n7 8 .").unwrap();
        assert_eq!(board, Board::solved(3).unwrap());

        let board = Board::from_text("1 2 3\n4 5 6\n7 8 0").unwrap();
        assert_eq!(board, Board::solved(3).unwrap());
    }

    #[test]
    fn test_from_text_invalid_token() {
        assert!(Board::from_text("1 2 3\n4 x 6\n7 8 .").is_err());
        assert!(Board::from_text("").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let board = board_3x3([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let text = board.to_string();
        assert_eq!(Board::from_text(&text).unwrap(), board);

        // Two-digit tiles stay aligned
        let board = Board::solved(4).unwrap();
        let text = board.to_string();
        assert_eq!(Board::from_text(&text).unwrap(), board);
    }

    #[test]
    fn test_solved() {
        let board = Board::solved(3).unwrap();
        assert_eq!(board.blank(), (2, 2));
        assert_eq!(board.tile(0, 0), 1);
        assert_eq!(board.tile(2, 1), 8);
        assert!(Board::solved(1).is_err());
    }

    #[test]
    fn test_slide_bounds() {
        let board = Board::solved(3).unwrap();
        // Blank in the bottom-right corner: only Up and Left stay in bounds
        assert!(board.slide(Direction::Down).is_none());
        assert!(board.slide(Direction::Right).is_none());

        let up = board.slide(Direction::Up).unwrap();
        assert_eq!(up.blank(), (1, 2));
        assert_eq!(up.tile(2, 2), 6);

        let left = board.slide(Direction::Left).unwrap();
        assert_eq!(left.blank(), (2, 1));
        assert_eq!(left.tile(2, 2), 8);
    }

    #[test]
    fn test_successor_counts() {
        // Corner blank: 2 successors
        assert_eq!(Board::solved(3).unwrap().successors().len(), 2);

        // Edge blank: 3 successors
        let board = board_3x3([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(board.successors().len(), 3);

        // Interior blank: 4 successors
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        assert_eq!(board.successors().len(), 4);
    }

    #[test]
    fn test_successors_differ_by_one_swap() {
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        for successor in board.successors() {
            let differing: Vec<(u8, u8)> = (0..3)
                .flat_map(|r| (0..3).map(move |c| (r, c)))
                .filter(|&(r, c)| board.tile(r, c) != successor.tile(r, c))
                .collect();
            // Exactly two cells change: the blank and one adjacent tile
            assert_eq!(differing.len(), 2);
            assert!(differing.contains(&board.blank()));
            assert!(differing.contains(&successor.blank()));
            let (r0, c0) = differing[0];
            let (r1, c1) = differing[1];
            assert_eq!(r0.abs_diff(r1) + c0.abs_diff(c1), 1);
        }
    }

    #[test]
    fn test_slide_then_undo() {
        let board = board_3x3([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let moved = board.slide(Direction::Down).unwrap();
        let undone = moved.slide(Direction::Up).unwrap();
        assert_eq!(undone, board);
    }

    #[test]
    fn test_solvable_to_adjacent_swap() {
        let goal = Board::solved(3).unwrap();
        let board = board_3x3([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert!(board.solvable_to(&goal));
    }

    #[test]
    fn test_solvable_to_transposed_pair() {
        // Swapping two tiles without moving the blank flips parity
        let goal = Board::solved(3).unwrap();
        let board = board_3x3([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        assert!(!board.solvable_to(&goal));
    }

    #[test]
    fn test_solvable_to_self() {
        let board = Board::solved(4).unwrap();
        assert!(board.solvable_to(&board));
    }

    #[test]
    fn test_solvable_to_size_mismatch() {
        let small = Board::solved(3).unwrap();
        let large = Board::solved(4).unwrap();
        assert!(!small.solvable_to(&large));
    }

    #[test]
    fn test_solvable_to_follows_slides() {
        let goal = Board::solved(3).unwrap();
        let mut board = goal.clone();
        for dir in [
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ] {
            board = board.slide(dir).unwrap();
            assert!(board.solvable_to(&goal));
        }
    }
}
