//! Seeded puzzle generation with a uniqueness-preserving reduction.

use numplace_core::{Board, Difficulty, GridSize, SeedRng};
use rand::seq::SliceRandom as _;

use crate::config;

/// An immutable puzzle/solution pair.
///
/// The nonzero cells of `puzzle` are the givens; at every point of the
/// reduction that produced it, `puzzle` had exactly one solution, and that
/// solution is `solution`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable board: the solution with cells dug out.
    pub puzzle: Board,
    /// The fully filled, valid board the puzzle reduces to.
    pub solution: Board,
    /// The seed string that reproduces this pair.
    pub seed: String,
    /// Clue count the reduction dug toward.
    pub target_clues: usize,
}

impl GeneratedPuzzle {
    /// Number of givens left in the puzzle.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.puzzle.filled_count()
    }

    /// Returns whether the reduction reached its clue budget.
    ///
    /// A `false` here is a degraded-quality outcome, not a failure: no more
    /// cells could be removed without losing uniqueness, so the puzzle
    /// carries more clues than the difficulty asked for.
    #[must_use]
    pub fn met_target(&self) -> bool {
        self.clue_count() <= self.target_clues
    }
}

/// Generates puzzles for one grid size and difficulty.
///
/// # Examples
///
/// ```
/// use numplace_core::{Difficulty, GridSize};
/// use numplace_generator::PuzzleGenerator;
/// use numplace_solver::count_solutions;
///
/// let generator = PuzzleGenerator::new(GridSize::FOUR, Difficulty::Easy);
/// let generated = generator.generate_with_seed("test");
///
/// assert!(generated.solution.is_solved_grid());
/// assert_eq!(count_solutions(&generated.puzzle, 2), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    size: GridSize,
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given size and difficulty.
    #[must_use]
    pub fn new(size: GridSize, difficulty: Difficulty) -> Self {
        Self { size, difficulty }
    }

    /// Generates the puzzle a seed string determines.
    ///
    /// The same seed always yields the same pair. Seeding is total: any
    /// string works, including the empty string. Callers that want
    /// distinct puzzles per request should substitute a fresh value (for
    /// example time-derived) for an empty seed before calling, so the
    /// session stays reproducible once the substitute is recorded.
    ///
    /// The generation never fails: in the worst case no cell can be removed
    /// and the puzzle comes back fully filled, with
    /// [`met_target`](GeneratedPuzzle::met_target) reporting the miss.
    #[must_use]
    pub fn generate_with_seed(&self, seed: &str) -> GeneratedPuzzle {
        let mut rng = SeedRng::from_seed(seed);
        #[expect(clippy::missing_panics_doc)]
        let solution = numplace_solver::solve(&Board::empty(self.size), 1, Some(&mut rng))
            .solution
            .expect("an empty board always has a solution");
        let target_clues = config::target_clues(self.size, self.difficulty);

        let mut puzzle = solution.clone();
        let mut filled = puzzle.filled_count();

        // Dig greedily along one shuffled pass: a removal is kept only when
        // the remaining grid still has exactly one solution. No removal is
        // ever revisited, so the result is not a globally minimal puzzle.
        let mut indices: Vec<usize> = (0..self.size.cell_count()).collect();
        indices.shuffle(&mut rng);

        for index in indices {
            if filled <= target_clues {
                break;
            }
            let backup = puzzle.get(index);
            puzzle.set(index, 0);
            if numplace_solver::count_solutions(&puzzle, 2) == 1 {
                filled -= 1;
                log::trace!("removed clue at {index}, {filled} cells remain");
            } else {
                puzzle.set(index, backup);
            }
        }

        if filled > target_clues {
            log::warn!(
                "clue reduction stopped at {filled} clues, above the target of {target_clues}"
            );
        }

        GeneratedPuzzle {
            puzzle,
            solution,
            seed: seed.to_owned(),
            target_clues,
        }
    }
}
