use crate::status::TaskStatus;
use crate::task::{ChecklistItem, Comment, SubTask, Task, TaskPriority};

/// Edit to a single optional field. A bare `Option<T>` in an update
/// cannot tell "leave the field alone" apart from "erase it", so each
/// optional task field carries one of these instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The field is not part of this update.
    Keep,
    /// Replace whatever is there with this value.
    Assign(T),
    /// Erase the field.
    Unset,
}

// Manual impl: deriving would demand T: Default for no reason.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Assign(value) => *slot = Some(value),
            Patch::Unset => *slot = None,
        }
    }

    /// Whether applying this patch can change the slot.
    pub fn edits(&self) -> bool {
        !matches!(self, Patch::Keep)
    }
}

/// Form code hands over `Option<T>` where `None` means the input was
/// emptied, which maps to an erase rather than a keep.
impl<T> From<Option<T>> for Patch<T> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Patch::Unset, Patch::Assign)
    }
}

/// Partial field set merged into an existing task. Fields left at their
/// defaults are not touched; `status` is carried through only when the
/// caller explicitly changes column membership.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub content: Option<String>,
    pub status: Option<TaskStatus>,
    pub description: Patch<String>,
    pub priority: Patch<TaskPriority>,
    pub due_date: Patch<String>,
    pub assignee: Patch<String>,
    pub labels: Option<Vec<String>>,
    pub subtasks: Option<Vec<SubTask>>,
    pub checklist: Option<Vec<ChecklistItem>>,
    pub comments: Option<Vec<Comment>>,
}

impl TaskUpdate {
    /// True when the update would change the task's column membership.
    pub fn changes_status(&self, current: TaskStatus) -> bool {
        matches!(self.status, Some(status) if status != current)
    }

    /// Merge this update into a task. Does not touch `id`, `created_at`,
    /// or `status` — column membership is owned by the board.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(content) = self.content {
            task.content = content;
        }
        self.description.apply(&mut task.description);
        self.priority.apply(&mut task.priority);
        self.due_date.apply(&mut task.due_date);
        self.assignee.apply(&mut task.assignee);
        if let Some(labels) = self.labels {
            task.labels = labels;
        }
        if let Some(subtasks) = self.subtasks {
            task.subtasks = subtasks;
        }
        if let Some(checklist) = self.checklist {
            task.checklist = checklist;
        }
        if let Some(comments) = self.comments {
            task.comments = comments;
        }
        task.updated_at = chrono::Utc::now();
    }
}
