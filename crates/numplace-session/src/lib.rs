//! Interactive play sessions for generated puzzles.
//!
//! A [`Session`] consumes a [`GeneratedPuzzle`] and tracks everything a
//! front end needs while a player works: current entries, per-cell note
//! bitmasks, given-cell immutability, a linear undo/redo history, and
//! advisory conflict flags recomputed after every mutation.
//!
//! All transitions are synchronous and total: invalid targets (no
//! selection, a given cell, an empty stack) are silent no-ops reported as
//! [`Outcome::Ignored`], never errors. The render boundary is
//! [`Session::cell`], which yields a [`CellView`] per cell.
//!
//! [`GeneratedPuzzle`]: numplace_generator::GeneratedPuzzle
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Difficulty, GridSize, SeedRng};
//! use numplace_generator::PuzzleGenerator;
//! use numplace_session::Session;
//!
//! let generator = PuzzleGenerator::new(GridSize::FOUR, Difficulty::Easy);
//! let puzzle = generator.generate_with_seed("lib-doc");
//! let mut session = Session::new(puzzle, SeedRng::from_seed("lib-doc"));
//!
//! // Hints fill empty cells from the solution.
//! session.hint();
//! assert!(session.can_undo());
//! session.undo();
//! assert!(!session.can_undo());
//! ```

mod history;
mod session;

pub use self::session::{CellView, Outcome, Session};
