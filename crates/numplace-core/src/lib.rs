//! Core data structures for the numplace puzzle engine.
//!
//! This crate provides the board model, candidate bitmasks, deterministic
//! seeded randomness, and duplicate detection shared by the solving,
//! generation, and session crates.
//!
//! # Overview
//!
//! - [`size`]: [`GridSize`], side length, region size, index arithmetic
//! - [`board`]: [`Board`], flat cell storage with parsing and display
//! - [`masks`]: [`HouseMasks`], row/column/region occupancy bitmasks
//! - [`rng`]: [`SeedRng`], a string-seeded deterministic generator
//! - [`conflict`]: [`conflict_flags`], advisory duplicate detection
//! - [`symbols`]: the display alphabet for cell values
//! - [`difficulty`]: [`Difficulty`], the generation request vocabulary
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Board, HouseMasks, mask_values};
//!
//! let board: Board = "1234 34.2 2143 4321".parse()?;
//! let masks = HouseMasks::scan(&board);
//!
//! // The lone hole admits exactly one value.
//! let open: Vec<u8> = mask_values(masks.candidates(1, 2)).collect();
//! assert_eq!(open, [1]);
//! # Ok::<(), numplace_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod conflict;
pub mod difficulty;
pub mod masks;
pub mod rng;
pub mod size;
pub mod symbols;

pub use self::{
    board::{Board, ParseBoardError},
    conflict::conflict_flags,
    difficulty::{Difficulty, ParseDifficultyError},
    masks::{HouseMasks, mask_values},
    rng::SeedRng,
    size::{GridSize, GridSizeError},
};
