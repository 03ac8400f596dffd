pub mod board;
pub mod drag;
pub mod progress;
pub mod search;
pub mod status;
pub mod task;
pub mod update;

pub use board::{Board, Column};
pub use drag::{apply_drag, DragLocation, DragResult};
pub use progress::{completion_ratio, task_progress};
pub use search::{filter_board, ColumnView, SearchQuery};
pub use status::TaskStatus;
pub use task::{ChecklistItem, Comment, Dependencies, SubTask, Task, TaskDraft, TaskId, TaskPriority};
pub use update::{Patch, TaskUpdate};
