//! The play-session state machine.

use numplace_core::{Board, GridSize, HouseMasks, SeedRng, conflict_flags};
use numplace_generator::GeneratedPuzzle;

use crate::history::Change;

/// Result of a mutating session transition.
///
/// Transitions on invalid targets (no selection, a given cell, an empty
/// undo/redo stack) are silent no-ops rather than errors, so the variant is
/// the whole story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition did not apply; state is unchanged.
    Ignored,
    /// State changed.
    Applied,
    /// State changed and the entries now match the solution exactly.
    Solved,
}

impl Outcome {
    /// Returns whether the transition changed state.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Render-facing snapshot of one cell: everything a front end needs to draw
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Current value, `0` when empty.
    pub value: u8,
    /// Note bitmask (bit `i` set means value `i + 1` is annotated).
    pub notes: u64,
    /// Whether the cell is a given and therefore immutable.
    pub given: bool,
    /// Whether the cell currently collides with a peer.
    pub conflict: bool,
    /// Whether the cell is selected.
    pub selected: bool,
}

/// Interactive play state for one generated puzzle.
///
/// A session owns its boards, stacks, and RNG; nothing is shared between
/// sessions, and a "new game" simply replaces the whole value. Conflict
/// flags are recomputed after every mutation and are purely advisory; they
/// never block input.
///
/// # Examples
///
/// ```
/// use numplace_core::{Difficulty, GridSize, SeedRng};
/// use numplace_generator::PuzzleGenerator;
/// use numplace_session::{Outcome, Session};
///
/// let generator = PuzzleGenerator::new(GridSize::FOUR, Difficulty::Easy);
/// let puzzle = generator.generate_with_seed("doc");
/// let mut session = Session::new(puzzle, SeedRng::from_seed("doc-session"));
///
/// // Inputs need a selected, non-given cell.
/// assert_eq!(session.input(1), Outcome::Ignored);
///
/// let empty = session.entries().empty_indices().next().unwrap();
/// session.select(empty);
/// assert!(session.input(1).is_applied());
/// assert!(session.undo().is_applied());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    size: GridSize,
    puzzle: Board,
    solution: Board,
    entries: Board,
    notes: Vec<u64>,
    given: Vec<bool>,
    selected: Option<usize>,
    note_mode: bool,
    history: Vec<Change>,
    future: Vec<Change>,
    conflicts: Vec<bool>,
    rng: SeedRng,
}

impl Session {
    /// Creates a session from a generated puzzle.
    ///
    /// Entries start as the puzzle; the puzzle's nonzero cells become the
    /// immutable givens. The RNG drives hint-cell selection and belongs to
    /// this session alone.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle, rng: SeedRng) -> Self {
        let GeneratedPuzzle {
            puzzle, solution, ..
        } = puzzle;
        let size = puzzle.size();
        let given = puzzle.cells().iter().map(|&value| value != 0).collect();
        let conflicts = conflict_flags(&puzzle);
        Self {
            size,
            entries: puzzle.clone(),
            puzzle,
            solution,
            notes: vec![0; size.cell_count()],
            given,
            selected: None,
            note_mode: false,
            history: Vec::new(),
            future: Vec::new(),
            conflicts,
            rng,
        }
    }

    /// The board's dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The current player-facing board.
    #[must_use]
    pub fn entries(&self) -> &Board {
        &self.entries
    }

    /// The solution the puzzle reduces to.
    #[must_use]
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// The selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether numeric input is currently interpreted as note toggling.
    #[must_use]
    pub fn note_mode(&self) -> bool {
        self.note_mode
    }

    /// Whether the cell at `index` is a given.
    #[must_use]
    pub fn is_given(&self, index: usize) -> bool {
        self.given[index]
    }

    /// Render snapshot of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn cell(&self, index: usize) -> CellView {
        CellView {
            value: self.entries.get(index),
            notes: self.notes[index],
            given: self.given[index],
            conflict: self.conflicts[index],
            selected: self.selected == Some(index),
        }
    }

    /// Number of cells currently flagged as conflicting.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.conflicts.iter().filter(|&&flag| flag).count()
    }

    /// Returns whether a filled cell disagrees with the solution.
    ///
    /// Advisory, for front ends with an auto-check display; empty cells are
    /// never wrong.
    #[must_use]
    pub fn is_wrong(&self, index: usize) -> bool {
        let value = self.entries.get(index);
        value != 0 && value != self.solution.get(index)
    }

    /// Returns whether the entries equal the solution cell for cell.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.entries == self.solution
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Selects a cell. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Outcome {
        if index >= self.size.cell_count() {
            return Outcome::Ignored;
        }
        self.selected = Some(index);
        Outcome::Applied
    }

    /// Toggles between entry input and note input.
    pub fn toggle_note_mode(&mut self) {
        self.note_mode = !self.note_mode;
    }

    /// Applies numeric input to the selected cell.
    ///
    /// In note mode the value's bit is XOR-toggled in the cell's notes and
    /// the entry is untouched; otherwise the entry is set and the cell's
    /// notes are cleared. No-op without a selection, on a given cell, or for
    /// a value outside `1..=N`. The solved check runs only on entry input.
    pub fn input(&mut self, value: u8) -> Outcome {
        let Some(index) = self.selected else {
            return Outcome::Ignored;
        };
        if self.given[index] || value == 0 || value > self.size.side() {
            return Outcome::Ignored;
        }

        if self.note_mode {
            let next_notes = self.notes[index] ^ (1 << (value - 1));
            self.record(index, self.entries.get(index), next_notes);
            self.notes[index] = next_notes;
            self.refresh_conflicts();
            Outcome::Applied
        } else {
            self.record(index, value, 0);
            self.entries.set(index, value);
            self.notes[index] = 0;
            self.refresh_conflicts();
            self.solved_outcome()
        }
    }

    /// Clears the selected cell's entry and notes.
    pub fn erase(&mut self) -> Outcome {
        let Some(index) = self.selected else {
            return Outcome::Ignored;
        };
        if self.given[index] {
            return Outcome::Ignored;
        }
        self.record(index, 0, 0);
        self.entries.set(index, 0);
        self.notes[index] = 0;
        self.refresh_conflicts();
        Outcome::Applied
    }

    /// Overwrites the selected cell's notes with its candidates.
    ///
    /// Candidates are computed against the current entries, not the
    /// solution. No-op unless the selection is an empty, non-given cell.
    pub fn auto_note(&mut self) -> Outcome {
        let Some(index) = self.selected else {
            return Outcome::Ignored;
        };
        if self.given[index] || self.entries.get(index) != 0 {
            return Outcome::Ignored;
        }
        let masks = HouseMasks::scan(&self.entries);
        let mask = masks.candidates(self.size.row_of(index), self.size.col_of(index));
        self.record(index, self.entries.get(index), mask);
        self.notes[index] = mask;
        self.refresh_conflicts();
        Outcome::Applied
    }

    /// Fills a uniformly random empty cell from the solution.
    ///
    /// No-op when the board is full. Hints land on empty cells only, so
    /// givens are never touched.
    pub fn hint(&mut self) -> Outcome {
        let empties: Vec<usize> = self.entries.empty_indices().collect();
        if empties.is_empty() {
            return Outcome::Ignored;
        }
        let index = empties[self.rng.next_index(empties.len())];
        let value = self.solution.get(index);
        self.record(index, value, 0);
        self.entries.set(index, value);
        self.notes[index] = 0;
        self.refresh_conflicts();
        self.solved_outcome()
    }

    /// Reverts the most recent change.
    pub fn undo(&mut self) -> Outcome {
        let Some(change) = self.history.pop() else {
            return Outcome::Ignored;
        };
        self.entries.set(change.index, change.prev_value);
        self.notes[change.index] = change.prev_notes;
        self.future.push(change);
        self.refresh_conflicts();
        Outcome::Applied
    }

    /// Re-applies the most recently undone change.
    pub fn redo(&mut self) -> Outcome {
        let Some(change) = self.future.pop() else {
            return Outcome::Ignored;
        };
        self.entries.set(change.index, change.next_value);
        self.notes[change.index] = change.next_notes;
        self.history.push(change);
        self.refresh_conflicts();
        Outcome::Applied
    }

    /// Resets the session to the original puzzle.
    ///
    /// Entries, notes, both stacks, the selection, and note mode are all
    /// cleared; the givens are re-derived from the puzzle.
    pub fn restart(&mut self) {
        self.entries = self.puzzle.clone();
        self.notes = vec![0; self.size.cell_count()];
        self.history.clear();
        self.future.clear();
        self.selected = None;
        self.note_mode = false;
        self.given = self.puzzle.cells().iter().map(|&value| value != 0).collect();
        self.refresh_conflicts();
    }

    /// Copies the solution into the entries.
    ///
    /// A terminal per-session action for the "show me" button; it is not
    /// recorded in history and runs no solved notification.
    pub fn reveal(&mut self) {
        self.entries = self.solution.clone();
        self.refresh_conflicts();
    }

    fn record(&mut self, index: usize, next_value: u8, next_notes: u64) {
        self.history.push(Change {
            index,
            prev_value: self.entries.get(index),
            next_value,
            prev_notes: self.notes[index],
            next_notes,
        });
        self.future.clear();
    }

    fn refresh_conflicts(&mut self) {
        self.conflicts = conflict_flags(&self.entries);
    }

    fn solved_outcome(&self) -> Outcome {
        if self.is_solved() {
            Outcome::Solved
        } else {
            Outcome::Applied
        }
    }
}
