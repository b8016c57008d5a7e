use crate::board::Board;
use crate::error::PuzzleError;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Generates starting boards from a seeded PRNG, so puzzle runs are
/// reproducible from the seed alone.
pub struct Scrambler {
    rng: ChaCha8Rng,
}

impl Scrambler {
    pub fn new(seed: u64) -> Self {
        Scrambler {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Scramble by walking the blank `steps` random slides away from the
    /// goal board. The result is always solvable back to the goal.
    pub fn random_walk(&mut self, goal: &Board, steps: usize) -> Board {
        let mut board = goal.clone();
        for _ in 0..steps {
            let successors = board.successors();
            // A valid board always has at least two successors
            board = successors.choose(&mut self.rng).unwrap().clone();
        }
        board
    }

    /// Scramble by shuffling all tiles uniformly. Half of all permutations
    /// are unreachable from any given goal, so the result may be unsolvable.
    pub fn random_board(&mut self, size: usize) -> Result<Board, PuzzleError> {
        let cells = size
            .checked_mul(size)
            .filter(|&c| c <= u8::MAX as usize + 1)
            .ok_or_else(|| {
                PuzzleError::InvalidBoard(format!("Board dimension {} is out of range", size))
            })?;
        // cells may be 256, which u8 cannot count to: map from usize
        let mut tiles: Vec<u8> = (0..cells).map(|value| value as u8).collect();
        tiles.shuffle(&mut self.rng);
        Board::from_row_major(size, tiles)
    }
}
