//! Puzzle generation for the numplace engine.
//!
//! A [`PuzzleGenerator`] turns a seed string into a [`GeneratedPuzzle`]: it
//! first asks the solver for a randomized full solution of an empty board,
//! then digs clues out one at a time along a shuffled order, re-solving with
//! a limit of two after each tentative removal and keeping it only when
//! exactly one solution remains. The clue budget per size and difficulty
//! comes from [`target_clues`].
//!
//! Both the grid fill and the dig order draw from a single [`SeedRng`]
//! instance, so a seed string reproduces its puzzle exactly.
//!
//! [`SeedRng`]: numplace_core::SeedRng
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Difficulty, GridSize};
//! use numplace_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(GridSize::NINE, Difficulty::Medium);
//! let generated = generator.generate_with_seed("evening round");
//!
//! assert!(generated.solution.is_solved_grid());
//! assert!(generated.clue_count() >= generated.target_clues);
//! ```

mod config;
mod generate;

pub use self::{
    config::target_clues,
    generate::{GeneratedPuzzle, PuzzleGenerator},
};
