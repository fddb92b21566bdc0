//! Example demonstrating seeded puzzle generation.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a size, difficulty, and seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 4 --difficulty expert --seed kitchen-table
//! ```
//!
//! Omitting `--seed` derives a time-based seed so repeated runs still print
//! the value needed to reproduce the puzzle.

use std::{
    process,
    time::{SystemTime, UNIX_EPOCH},
};

use clap::{Parser, ValueEnum};
use numplace_core::{Difficulty, GridSize};
use numplace_generator::PuzzleGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Expert => Self::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length (a perfect square, e.g. 4 or 9).
    #[arg(long, value_name = "SIDE", default_value_t = 9)]
    size: u8,

    /// Difficulty selecting the clue budget.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed string; the same seed reproduces the same puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match GridSize::new(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let seed = args.seed.filter(|s| !s.is_empty()).unwrap_or_else(|| {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        format!("auto-{now}")
    });

    let generator = PuzzleGenerator::new(size, args.difficulty.into());
    let generated = generator.generate_with_seed(&seed);

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle:");
    println!("  {}", generated.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", generated.solution);
    println!();
    println!("Clues:");
    println!("  {} (target {})", generated.clue_count(), generated.target_clues);
    if !generated.met_target() {
        println!("  no further clue could be removed without losing uniqueness");
    }
}
