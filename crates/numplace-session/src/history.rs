//! Reversible change records for undo/redo.

/// A single reversible edit to one cell's value and notes.
///
/// The session pushes one of these before every mutating transition; undo
/// applies the `prev` pair, redo the `next` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Change {
    pub(crate) index: usize,
    pub(crate) prev_value: u8,
    pub(crate) next_value: u8,
    pub(crate) prev_notes: u64,
    pub(crate) next_notes: u64,
}
