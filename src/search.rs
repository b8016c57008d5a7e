use crate::board::Board;
use crate::error::PuzzleError;
use crate::heuristic::{GoalMap, HeuristicKind};
use crate::pqueue::MinQueue;
use std::collections::HashSet;

/// Outcome of a search: either the full board sequence from the initial
/// board to the goal inclusive, or exhaustion of the reachable state space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Solved(Vec<Board>),
    NotFound,
}

// One discovered state. parent indexes into the solver's arena and is
// followed only during path reconstruction, so the node graph stays a tree.
struct Node {
    board: Board,
    depth: u32,
    parent: Option<usize>,
}

/// Greedy best-first search over board configurations. Priority is the
/// heuristic value alone: depth is tracked per node but never enters the
/// ordering, so returned paths are feasible, not necessarily shortest.
pub struct Solver {
    heuristic: HeuristicKind,
    nodes_explored: usize,
}

impl Solver {
    pub fn new(heuristic: HeuristicKind) -> Self {
        Solver {
            heuristic,
            nodes_explored: 0,
        }
    }

    /// Number of states expanded across all calls to solve.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// Search from initial to goal, guided by the selected heuristic.
    pub fn solve(&mut self, initial: &Board, goal: &Board) -> Result<SearchResult, PuzzleError> {
        if initial.size() != goal.size() {
            return Err(PuzzleError::SizeMismatch {
                initial: initial.size(),
                goal: goal.size(),
            });
        }

        let goal_map = GoalMap::new(goal);

        let mut arena = vec![Node {
            board: initial.clone(),
            depth: 0,
            parent: None,
        }];
        let mut open = MinQueue::new();
        let mut closed: HashSet<Board> = HashSet::new();
        open.push(self.heuristic.evaluate(initial, &goal_map), 0);

        while let Some(index) = open.pop_min() {
            if arena[index].board == *goal {
                return Ok(SearchResult::Solved(reconstruct_path(&arena, index)));
            }

            // Reached again via an equal or worse path: already expanded
            if closed.contains(&arena[index].board) {
                continue;
            }
            closed.insert(arena[index].board.clone());
            self.nodes_explored += 1;

            let depth = arena[index].depth;
            for successor in arena[index].board.successors() {
                if closed.contains(&successor) {
                    continue;
                }
                let priority = self.heuristic.evaluate(&successor, &goal_map);
                arena.push(Node {
                    board: successor,
                    depth: depth + 1,
                    parent: Some(index),
                });
                open.push(priority, arena.len() - 1);
            }
        }

        Ok(SearchResult::NotFound)
    }
}

/// Solve a single puzzle with a one-shot solver.
pub fn solve(
    initial: &Board,
    goal: &Board,
    heuristic: HeuristicKind,
) -> Result<SearchResult, PuzzleError> {
    Solver::new(heuristic).solve(initial, goal)
}

/// Walk parent links from the goal node back to the root, then reverse so
/// the sequence runs from the initial board to the goal.
fn reconstruct_path(arena: &[Node], goal_index: usize) -> Vec<Board> {
    let mut boards = Vec::new();
    let mut current = Some(goal_index);
    while let Some(index) = current {
        boards.push(arena[index].board.clone());
        current = arena[index].parent;
    }
    boards.reverse();
    debug_assert_eq!(boards.len(), arena[goal_index].depth as usize + 1);
    boards
}
