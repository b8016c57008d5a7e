mod board;
mod error;
mod heuristic;
mod pqueue;
mod puzzles;
mod scramble;
mod search;

use board::{Board, Direction};
use clap::{Parser, ValueEnum};
use heuristic::HeuristicKind;
use puzzles::Puzzles;
use scramble::Scrambler;
use search::{SearchResult, Solver};
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Misplaced,
    Manhattan,
    LinearConflict,
    Euclidean,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Misplaced => HeuristicKind::MisplacedTiles,
            HeuristicArg::Manhattan => HeuristicKind::Manhattan,
            HeuristicArg::LinearConflict => HeuristicKind::LinearConflict,
            HeuristicArg::Euclidean => HeuristicKind::Euclidean,
        }
    }
}

/// Describe the slide between two consecutive path boards: the moved tile
/// and the direction it traveled (opposite the blank's step).
fn slide_description(before: &Board, after: &Board) -> (u8, Direction) {
    let (before_row, before_col) = before.blank();
    let (after_row, after_col) = after.blank();
    let tile = after.tile(before_row, before_col);
    let dir = match (
        before_row as i32 - after_row as i32,
        before_col as i32 - after_col as i32,
    ) {
        (-1, 0) => Direction::Up,
        (1, 0) => Direction::Down,
        (0, -1) => Direction::Left,
        (0, 1) => Direction::Right,
        _ => unreachable!(),
    };
    (tile, dir)
}

fn print_solution(path: &[Board]) {
    println!("\nStarting position:\n{}", path[0]);
    let total = path.len() - 1;
    for (count, step) in path.windows(2).enumerate() {
        let (tile, dir) = slide_description(&step[0], &step[1]);
        println!("Slide tile {} {} ({}/{}):\n{}", tile, dir, count + 1, total, step[1]);
    }
}

struct PuzzleStats {
    solved: bool,
    steps: usize,
    states_explored: usize,
    elapsed_ms: u128,
}

struct SolveOpts {
    puzzle_num: usize,
    heuristic: HeuristicKind,
    print_solution: bool,
    parity_check: bool,
}

fn solve_puzzle(initial: &Board, goal: &Board, opts: SolveOpts) -> PuzzleStats {
    if opts.parity_check && !initial.solvable_to(goal) {
        println!(
            "puzzle: {:<3}  solved: X  steps: {:<5}  states: {:<12}  elapsed: {} ms",
            opts.puzzle_num, 0, 0, 0
        );
        return PuzzleStats {
            solved: false,
            steps: 0,
            states_explored: 0,
            elapsed_ms: 0,
        };
    }

    let mut solver = Solver::new(opts.heuristic);
    let start = Instant::now();
    let result = solver.solve(initial, goal);
    let elapsed_ms = start.elapsed().as_millis();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let states_explored = solver.nodes_explored();
    let (solved_char, steps, solved) = match &result {
        SearchResult::Solved(path) => ('Y', path.len() - 1, true),
        SearchResult::NotFound => ('N', 0, false),
    };

    println!(
        "puzzle: {:<3}  solved: {}  steps: {:<5}  states: {:<12}  elapsed: {} ms",
        opts.puzzle_num, solved_char, steps, states_explored, elapsed_ms
    );

    if opts.print_solution {
        if let SearchResult::Solved(path) = &result {
            print_solution(path);
        }
    }

    PuzzleStats {
        solved,
        steps,
        states_explored,
        elapsed_ms,
    }
}

#[derive(Parser)]
#[command(name = "tilerush")]
#[command(about = "An N-puzzle solver", long_about = None)]
struct Args {
    /// Path to a puzzles file; omit to solve generated scrambles instead
    #[arg(value_name = "FILE")]
    puzzles_file: Option<String>,

    /// Puzzle number to solve (1-indexed), or start of range
    #[arg(value_name = "PUZZLE")]
    puzzle_start: Option<usize>,

    /// Optional end of puzzle range (inclusive, 1-indexed)
    #[arg(value_name = "PUZZLE_END")]
    puzzle_end: Option<usize>,

    /// Print the solution step-by-step
    #[arg(short, long)]
    print_solution: bool,

    /// Heuristic to use for solving
    #[arg(short = 'H', long, value_enum, default_value = "linear-conflict")]
    heuristic: HeuristicArg,

    /// Select the heuristic by menu number 1-4 instead (overrides -H)
    #[arg(long, value_name = "N")]
    heuristic_index: Option<u8>,

    /// File holding a single goal board (default: tiles in order, blank last)
    #[arg(short, long)]
    goal_file: Option<String>,

    /// Board dimension for generated scrambles
    #[arg(short, long, default_value = "3")]
    size: usize,

    /// Number of scrambles to generate
    #[arg(short = 'c', long, default_value = "1")]
    count: usize,

    /// Random blank slides per generated scramble
    #[arg(long, default_value = "30")]
    scramble: usize,

    /// Shuffle tiles uniformly instead of walking the blank (may produce
    /// unsolvable puzzles)
    #[arg(long, default_value = "false")]
    uniform_shuffle: bool,

    /// Seed for the scramble RNG
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Disable the solvability precheck
    #[arg(long, default_value = "false")]
    no_parity_check: bool,
}

fn main() {
    let args = Args::parse();

    let heuristic = match args.heuristic_index {
        Some(index) => match HeuristicKind::from_index(index) {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => HeuristicKind::from(args.heuristic),
    };

    let goal_override = args.goal_file.as_ref().map(|path| {
        let puzzles = match Puzzles::from_file(path) {
            Ok(puzzles) => puzzles,
            Err(e) => {
                eprintln!("Error loading goal board: {}", e);
                std::process::exit(1);
            }
        };
        if puzzles.len() != 1 {
            eprintln!(
                "Error: goal file must contain exactly one board (found {})",
                puzzles.len()
            );
            std::process::exit(1);
        }
        puzzles.get(0).unwrap().clone()
    });

    // Either load the requested range from a file or generate scrambles
    let (boards, first_num) = if let Some(path) = &args.puzzles_file {
        let puzzles = match Puzzles::from_file(path) {
            Ok(puzzles) => puzzles,
            Err(e) => {
                eprintln!("Error loading puzzles: {}", e);
                std::process::exit(1);
            }
        };

        let puzzle_start = args.puzzle_start.unwrap_or(1);
        let puzzle_end = args.puzzle_end.unwrap_or(puzzle_start);

        if puzzle_start == 0 {
            eprintln!("Error: puzzle numbers must be at least 1");
            std::process::exit(1);
        }

        if puzzle_end < puzzle_start {
            eprintln!("Error: puzzle end must be >= puzzle start");
            std::process::exit(1);
        }

        if puzzle_end > puzzles.len() {
            eprintln!(
                "Error: puzzle {} not found (file contains {} puzzles)",
                puzzle_end,
                puzzles.len()
            );
            std::process::exit(1);
        }

        let boards: Vec<Board> = (puzzle_start..=puzzle_end)
            .map(|num| puzzles.get(num - 1).unwrap().clone())
            .collect();
        (boards, puzzle_start)
    } else {
        if args.puzzle_start.is_some() {
            eprintln!("Error: puzzle numbers require a puzzles file");
            std::process::exit(1);
        }

        let mut scrambler = Scrambler::new(args.seed);
        let goal = match Board::solved(args.size) {
            Ok(goal) => goal,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        let mut boards = Vec::new();
        for _ in 0..args.count {
            if args.uniform_shuffle {
                match scrambler.random_board(args.size) {
                    Ok(board) => boards.push(board),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                boards.push(scrambler.random_walk(&goal, args.scramble));
            }
        }
        (boards, 1)
    };

    if args.print_solution && boards.len() > 1 {
        eprintln!("Error: solution printing only supported when solving a single puzzle");
        std::process::exit(1);
    }

    let mut total_solved = 0;
    let mut total_steps = 0;
    let mut total_states = 0;
    let mut total_time_ms = 0;

    for (offset, initial) in boards.iter().enumerate() {
        // Goal defaults to the canonical board of the puzzle's own size
        let goal = match &goal_override {
            Some(goal) => goal.clone(),
            None => Board::solved(initial.size()).unwrap(),
        };

        let opts = SolveOpts {
            puzzle_num: first_num + offset,
            heuristic,
            print_solution: args.print_solution,
            parity_check: !args.no_parity_check,
        };
        let stats = solve_puzzle(initial, &goal, opts);

        if stats.solved {
            total_solved += 1;
        }
        total_steps += stats.steps;
        total_states += stats.states_explored;
        total_time_ms += stats.elapsed_ms;
    }

    if boards.len() > 1 {
        println!("---");
        println!(
            "solved: {:>3}/{:<3}        steps: {:<5}  states: {:<12}  elapsed: {} ms",
            total_solved,
            boards.len(),
            total_steps,
            total_states,
            total_time_ms
        );
    }
}
