//! Clue budgets per grid size and difficulty.

use numplace_core::{Difficulty, GridSize};

/// Returns the clue count the generator digs toward.
///
/// Built-in rows exist for sides 9 and 4; any other size falls back to
/// `round(0.4 · N²)`.
///
/// # Examples
///
/// ```
/// use numplace_core::{Difficulty, GridSize};
/// use numplace_generator::target_clues;
///
/// assert_eq!(target_clues(GridSize::NINE, Difficulty::Easy), 45);
/// assert_eq!(target_clues(GridSize::FOUR, Difficulty::Expert), 5);
/// // Sizes without a table row use the formulaic fallback.
/// assert_eq!(target_clues(GridSize::new(16).unwrap(), Difficulty::Medium), 102);
/// ```
#[must_use]
pub fn target_clues(size: GridSize, difficulty: Difficulty) -> usize {
    match (size.side(), difficulty) {
        (9, Difficulty::Easy) => 45,
        (9, Difficulty::Medium) => 36,
        (9, Difficulty::Hard) => 30,
        (9, Difficulty::Expert) => 24,
        (4, Difficulty::Easy) => 10,
        (4, Difficulty::Medium) => 8,
        (4, Difficulty::Hard) => 6,
        (4, Difficulty::Expert) => 5,
        _ => {
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss
            )]
            let fallback = (0.4 * size.cell_count() as f64).round() as usize;
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let nine = [(Difficulty::Easy, 45), (Difficulty::Medium, 36), (Difficulty::Hard, 30), (Difficulty::Expert, 24)];
        for (difficulty, clues) in nine {
            assert_eq!(target_clues(GridSize::NINE, difficulty), clues);
        }
        let four = [(Difficulty::Easy, 10), (Difficulty::Medium, 8), (Difficulty::Hard, 6), (Difficulty::Expert, 5)];
        for (difficulty, clues) in four {
            assert_eq!(target_clues(GridSize::FOUR, difficulty), clues);
        }
    }

    #[test]
    fn test_fallback_is_forty_percent_rounded() {
        let size = GridSize::new(25).unwrap();
        // 0.4 · 625 = 250
        for difficulty in Difficulty::ALL {
            assert_eq!(target_clues(size, difficulty), 250);
        }
        // 0.4 · 1296 = 518.4, rounds down
        assert_eq!(
            target_clues(GridSize::new(36).unwrap(), Difficulty::Easy),
            518
        );
    }
}
