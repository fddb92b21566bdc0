//! Backtracking constraint solver with a solution-count limit.
//!
//! The search always branches on the empty cell with the fewest legal
//! candidates (most-constrained-cell, a.k.a. minimum remaining values) and
//! stops as soon as `limit` solutions have been counted. Callers use it in
//! two modes:
//!
//! - `limit = 1` with a [`SeedRng`]: produce one full solution with a
//!   randomized candidate order, the first step of puzzle generation.
//! - `limit = 2` without an RNG: distinguish "exactly one solution" from
//!   "more than one" cheaply, the uniqueness check behind clue removal.
//!
//! Absence of a solution is a normal return, not an error: the outcome then
//! carries `solution: None, count: 0`.
//!
//! # Examples
//!
//! ```
//! use numplace_core::Board;
//! use numplace_solver::solve;
//!
//! let puzzle: Board = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! let outcome = solve(&puzzle, 2, None);
//! assert_eq!(outcome.count, 1);
//! assert!(outcome.solution.unwrap().is_solved_grid());
//! # Ok::<(), numplace_core::ParseBoardError>(())
//! ```

use numplace_core::{Board, GridSize, HouseMasks, SeedRng, mask_values};
use rand::seq::SliceRandom as _;
use tinyvec::ArrayVec;

/// Result of a [`solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// The first solution found, if any. Deterministic for a fixed candidate
    /// order, i.e. whenever the same RNG state (or none) is supplied.
    pub solution: Option<Board>,
    /// Number of solutions found, capped at the requested limit. Equals the
    /// true total only when that total is at most the limit.
    pub count: usize,
}

/// Searches for solutions of `board`, stopping after `limit` of them.
///
/// When `rng` is supplied, candidate values are shuffled at every branch
/// point; this is what makes generation produce varied grids from the same
/// empty start. Without an RNG the scan order is fixed, which is the fast
/// path for uniqueness counting.
///
/// The search works on an owned copy; the caller's board is never mutated.
#[must_use]
pub fn solve(board: &Board, limit: usize, rng: Option<&mut SeedRng>) -> SolveOutcome {
    if limit == 0 {
        return SolveOutcome {
            solution: None,
            count: 0,
        };
    }
    let mut search = Search {
        size: board.size(),
        masks: HouseMasks::scan(board),
        board: board.clone(),
        limit,
        count: 0,
        solution: None,
        rng,
    };
    search.run();
    SolveOutcome {
        solution: search.solution,
        count: search.count,
    }
}

/// Counts solutions of `board` up to `limit`, discarding the solutions
/// themselves. `count_solutions(board, 2) == 1` is the uniqueness check.
#[must_use]
pub fn count_solutions(board: &Board, limit: usize) -> usize {
    solve(board, limit, None).count
}

struct Search<'a> {
    size: GridSize,
    masks: HouseMasks,
    board: Board,
    limit: usize,
    count: usize,
    solution: Option<Board>,
    rng: Option<&'a mut SeedRng>,
}

impl Search<'_> {
    fn run(&mut self) {
        if self.count >= self.limit {
            return;
        }

        // Pick the empty cell with the fewest legal candidates. The zero
        // check is unconditional per cell, so a dead cell anywhere in the
        // scan aborts the branch regardless of the best seen so far; a
        // singleton ends the scan early since nothing can beat it.
        let mut best: Option<(usize, u64)> = None;
        let mut best_count = u32::MAX;
        for index in 0..self.size.cell_count() {
            if self.board.get(index) != 0 {
                continue;
            }
            let mask = self
                .masks
                .candidates(self.size.row_of(index), self.size.col_of(index));
            let candidate_count = mask.count_ones();
            if candidate_count == 0 {
                return;
            }
            if candidate_count < best_count {
                best_count = candidate_count;
                best = Some((index, mask));
                if candidate_count == 1 {
                    break;
                }
            }
        }

        let Some((index, mask)) = best else {
            // No empty cell left: the working copy is a full solution.
            self.count += 1;
            if self.solution.is_none() {
                self.solution = Some(self.board.clone());
            }
            return;
        };

        // Capacity 64 is the smallest tinyvec-supported array length that
        // holds the 36-value maximum alphabet.
        let mut candidates: ArrayVec<[u8; 64]> = mask_values(mask).collect();
        if let Some(rng) = self.rng.as_deref_mut() {
            candidates.shuffle(rng);
        }

        let row = self.size.row_of(index);
        let col = self.size.col_of(index);
        for &value in candidates.iter() {
            self.board.set(index, value);
            self.masks.place(row, col, value);
            self.run();
            self.board.set(index, 0);
            self.masks.remove(row, col, value);
            if self.count >= self.limit {
                return;
            }
        }
    }
}
