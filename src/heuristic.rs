use crate::board::Board;
use crate::error::PuzzleError;

/// Lookup from tile value to its (row, col) in the goal board. Built once
/// per search and read-only afterwards.
pub struct GoalMap {
    positions: Vec<(u8, u8)>,
}

impl GoalMap {
    pub fn new(goal: &Board) -> Self {
        let size = goal.size() as u8;
        let mut positions = vec![(0u8, 0u8); goal.size() * goal.size()];
        for row in 0..size {
            for col in 0..size {
                positions[goal.tile(row, col) as usize] = (row, col);
            }
        }
        GoalMap { positions }
    }

    pub fn position(&self, tile: u8) -> (u8, u8) {
        self.positions[tile as usize]
    }
}

/// The available heuristic cost estimators. All estimate remaining distance
/// to the goal (lower is closer) and ignore the blank tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    MisplacedTiles,
    Manhattan,
    LinearConflict,
    Euclidean,
}

pub const ALL_HEURISTICS: [HeuristicKind; 4] = [
    HeuristicKind::MisplacedTiles,
    HeuristicKind::Manhattan,
    HeuristicKind::LinearConflict,
    HeuristicKind::Euclidean,
];

impl HeuristicKind {
    /// Select a heuristic by its menu number (1-4).
    pub fn from_index(index: u8) -> Result<Self, PuzzleError> {
        usize::from(index)
            .checked_sub(1)
            .and_then(|i| ALL_HEURISTICS.get(i).copied())
            .ok_or(PuzzleError::InvalidHeuristic(index))
    }

    /// Score a board against the goal. The integer-valued heuristics are
    /// widened to f64 so all four share one priority type.
    pub fn evaluate(&self, board: &Board, goal: &GoalMap) -> f64 {
        match self {
            HeuristicKind::MisplacedTiles => f64::from(misplaced_tiles(board, goal)),
            HeuristicKind::Manhattan => f64::from(manhattan(board, goal)),
            HeuristicKind::LinearConflict => f64::from(linear_conflict(board, goal)),
            HeuristicKind::Euclidean => euclidean(board, goal),
        }
    }
}

/// Count of tiles not sitting in their goal cell.
pub fn misplaced_tiles(board: &Board, goal: &GoalMap) -> u32 {
    let size = board.size() as u8;
    let mut count = 0;
    for row in 0..size {
        for col in 0..size {
            let tile = board.tile(row, col);
            if tile != 0 && goal.position(tile) != (row, col) {
                count += 1;
            }
        }
    }
    count
}

/// Sum over tiles of |row delta| + |col delta| to the goal cell.
pub fn manhattan(board: &Board, goal: &GoalMap) -> u32 {
    let size = board.size() as u8;
    let mut distance = 0;
    for row in 0..size {
        for col in 0..size {
            let tile = board.tile(row, col);
            if tile != 0 {
                let (goal_row, goal_col) = goal.position(tile);
                distance += u32::from(row.abs_diff(goal_row)) + u32::from(col.abs_diff(goal_col));
            }
        }
    }
    distance
}

/// Manhattan distance plus 2 per conflicting pair: two tiles in their shared
/// goal row (or column) but in reversed relative order each need at least
/// two extra moves to pass one another.
pub fn linear_conflict(board: &Board, goal: &GoalMap) -> u32 {
    let size = board.size() as u8;
    let mut conflicts = 0;
    for row in 0..size {
        for col in 0..size {
            let tile = board.tile(row, col);
            if tile == 0 {
                continue;
            }
            let (goal_row, goal_col) = goal.position(tile);
            if row == goal_row {
                for other_col in col + 1..size {
                    let other = board.tile(row, other_col);
                    if other != 0 {
                        let (other_goal_row, other_goal_col) = goal.position(other);
                        if other_goal_row == row && other_goal_col < goal_col {
                            conflicts += 1;
                        }
                    }
                }
            }
            if col == goal_col {
                for other_row in row + 1..size {
                    let other = board.tile(other_row, col);
                    if other != 0 {
                        let (other_goal_row, other_goal_col) = goal.position(other);
                        if other_goal_col == col && other_goal_row < goal_row {
                            conflicts += 1;
                        }
                    }
                }
            }
        }
    }
    manhattan(board, goal) + 2 * conflicts
}

/// Sum over tiles of straight-line distance to the goal cell.
pub fn euclidean(board: &Board, goal: &GoalMap) -> f64 {
    let size = board.size() as u8;
    let mut distance = 0.0;
    for row in 0..size {
        for col in 0..size {
            let tile = board.tile(row, col);
            if tile != 0 {
                let (goal_row, goal_col) = goal.position(tile);
                let dr = f64::from(row) - f64::from(goal_row);
                let dc = f64::from(col) - f64::from(goal_col);
                distance += (dr * dr + dc * dc).sqrt();
            }
        }
    }
    distance
}
