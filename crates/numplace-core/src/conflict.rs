//! Advisory duplicate detection across rows, columns, and regions.
//!
//! Conflicts are a pure function of the board: every pair of cells that
//! shares a unit and a nonzero value gets **both** members flagged, so the
//! relation is symmetric. The result is a rendering hint; it never blocks
//! input.

use crate::Board;

/// Computes the per-cell conflict flags for a board.
///
/// # Examples
///
/// ```
/// use numplace_core::{Board, conflict_flags};
///
/// // Two 1s in the top row.
/// let board: Board = "1.1. .... .... ....".parse()?;
/// let flags = conflict_flags(&board);
/// assert!(flags[0] && flags[2]);
/// assert_eq!(flags.iter().filter(|&&f| f).count(), 2);
/// # Ok::<(), numplace_core::ParseBoardError>(())
/// ```
#[must_use]
pub fn conflict_flags(board: &Board) -> Vec<bool> {
    let size = board.size();
    let side = usize::from(size.side());
    let base = usize::from(size.base());
    let mut flags = vec![false; size.cell_count()];

    for row in 0..side {
        mark_duplicates(board, (0..side).map(|col| size.index_of(row, col)), &mut flags);
    }
    for col in 0..side {
        mark_duplicates(board, (0..side).map(|row| size.index_of(row, col)), &mut flags);
    }
    for region_row in 0..base {
        for region_col in 0..base {
            let indices = (0..side).map(|i| {
                size.index_of(region_row * base + i / base, region_col * base + i % base)
            });
            mark_duplicates(board, indices, &mut flags);
        }
    }

    flags
}

fn mark_duplicates(
    board: &Board,
    indices: impl Iterator<Item = usize>,
    flags: &mut [bool],
) {
    let mut first_seen = [None; 37];
    for index in indices {
        let value = usize::from(board.get(index));
        if value == 0 {
            continue;
        }
        match first_seen[value] {
            Some(first) => {
                flags[index] = true;
                flags[first] = true;
            }
            None => first_seen[value] = Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::GridSize;

    fn flagged(flags: &[bool]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_empty_board_has_no_conflicts() {
        let flags = conflict_flags(&Board::empty(GridSize::NINE));
        assert!(flags.iter().all(|&f| !f));
    }

    #[test]
    fn test_solved_grid_has_no_conflicts() {
        let board: Board = "1234 3412 2143 4321".parse().unwrap();
        assert!(conflict_flags(&board).iter().all(|&f| !f));
    }

    #[test]
    fn test_column_conflict_flags_both_cells() {
        let board: Board = "2... .... .... 2...".parse().unwrap();
        assert_eq!(flagged(&conflict_flags(&board)), [0, 12]);
    }

    #[test]
    fn test_region_conflict_without_shared_row_or_column() {
        let board: Board = "3... .3.. .... ....".parse().unwrap();
        assert_eq!(flagged(&conflict_flags(&board)), [0, 5]);
    }

    #[test]
    fn test_triple_duplicate_flags_all_members() {
        let board: Board = "4.44 .... .... ....".parse().unwrap();
        assert_eq!(flagged(&conflict_flags(&board)), [0, 2, 3]);
    }

    #[test]
    fn test_distinct_values_do_not_conflict() {
        let board: Board = "12.. .... .... ....".parse().unwrap();
        assert!(conflict_flags(&board).iter().all(|&f| !f));
    }

    proptest! {
        // Every same-unit duplicate pair is flagged on both ends, and every
        // flag is justified by such a pair.
        #[test]
        fn conflicts_are_symmetric_and_justified(
            cells in proptest::collection::vec(0_u8..=4, 16),
        ) {
            let size = GridSize::FOUR;
            let board = Board::from_cells(size, cells).unwrap();
            let flags = conflict_flags(&board);
            for a in 0..16 {
                for b in 0..16 {
                    if board.get(a) != 0
                        && board.get(a) == board.get(b)
                        && size.same_unit(a, b)
                    {
                        prop_assert!(flags[a] && flags[b]);
                    }
                }
            }
            for (index, &flag) in flags.iter().enumerate() {
                if flag {
                    let has_conflicting_peer = (0..16).any(|peer| {
                        board.get(peer) != 0
                            && board.get(peer) == board.get(index)
                            && size.same_unit(index, peer)
                    });
                    prop_assert!(has_conflicting_peer);
                }
            }
        }
    }
}
