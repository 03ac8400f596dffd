//! Drag-and-drop transition algorithm.
//!
//! Consumes the drag result emitted by the gesture library at drag-end and
//! computes the next board state: reorder within a column, move across
//! columns, or no-op for invalid drops. Pure — persistence is the caller's
//! responsibility and should be skipped when no transition occurred.

use crate::board::Board;
use crate::status::TaskStatus;

/// A position descriptor from the gesture library. Column ids arrive as
/// plain strings and may not name a real column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// The descriptor produced when a drag gesture ends. `destination` is
/// `None` when the drop landed outside any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

/// Apply a drag result to the board.
///
/// Returns `Some(next_board)` when a transition occurred, with exactly the
/// affected column(s) rebuilt and every other column untouched. Returns
/// `None` for all no-ops: missing destination, drop on the original slot,
/// unknown column id, or an out-of-range source index (malformed payload).
/// Callers must not write to storage on `None`.
pub fn apply_drag(board: &Board, result: &DragResult) -> Option<Board> {
    let destination = result.destination.as_ref()?;
    if *destination == result.source {
        return None;
    }

    let source_status = TaskStatus::parse(&result.source.column_id)?;
    let dest_status = TaskStatus::parse(&destination.column_id)?;

    let source_column = board.find_column(source_status)?;
    if result.source.index >= source_column.tasks.len() {
        return None;
    }

    let mut source_tasks = source_column.tasks.clone();
    let mut moved = source_tasks.remove(result.source.index);

    let mut next = board.clone();
    if source_status == dest_status {
        // Reorder: the destination index is relative to the sequence
        // after removal.
        let insert_at = destination.index.min(source_tasks.len());
        source_tasks.insert(insert_at, moved);
        next.replace_column(source_status, source_tasks);
    } else {
        moved.move_to_status(dest_status);
        let mut dest_tasks = board.find_column(dest_status)?.tasks.clone();
        let insert_at = destination.index.min(dest_tasks.len());
        dest_tasks.insert(insert_at, moved);
        // Source first, so the moved id never sits in two columns at once.
        next.replace_column(source_status, source_tasks);
        next.replace_column(dest_status, dest_tasks);
    }
    Some(next)
}
