use serde::{Deserialize, Serialize};

use crate::status::TaskStatus;
use crate::task::Task;

/// One status column. Task order within the column is significant and
/// user-controlled via drag position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: TaskStatus,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    fn empty(status: TaskStatus) -> Self {
        Self {
            id: status,
            title: status.title().to_string(),
            tasks: Vec::new(),
        }
    }
}

/// The aggregate root: the six columns in display order, exhaustively
/// partitioning all tasks. Mutation happens only through the board's own
/// methods and the drag engine, never through ad-hoc writes from view code.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with all six columns present.
    pub fn new() -> Self {
        Self {
            columns: TaskStatus::ALL.iter().map(|s| Column::empty(*s)).collect(),
        }
    }

    /// Rebuild a board from the flat persisted list, preserving list
    /// order within each column.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            let status = task.status;
            board
                .find_column_mut(status)
                .expect("all statuses have a column")
                .tasks
                .push(task);
        }
        board.check_partition();
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn find_column(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == status)
    }

    fn find_column_mut(&mut self, status: TaskStatus) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| col.id == status)
    }

    /// Swap in a new task sequence for one column. The caller is
    /// responsible for keeping every task's status equal to the column id;
    /// a violation is a programming error and trips the partition check.
    pub fn replace_column(&mut self, status: TaskStatus, tasks: Vec<Task>) {
        if let Some(column) = self.find_column_mut(status) {
            column.tasks = tasks;
        }
        self.check_partition();
    }

    /// Flatten all columns into the persisted list: column order first,
    /// then in-column order.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.columns
            .iter()
            .flat_map(|col| col.tasks.iter().cloned())
            .collect()
    }

    pub fn iter_tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|col| col.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).sum()
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.iter_tasks().find(|task| task.id == task_id)
    }

    pub fn find_task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.columns
            .iter_mut()
            .flat_map(|col| col.tasks.iter_mut())
            .find(|task| task.id == task_id)
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.find_task(task_id).is_some()
    }

    /// Append a task to the column matching its status.
    pub fn push_task(&mut self, task: Task) {
        let status = task.status;
        self.find_column_mut(status)
            .expect("all statuses have a column")
            .tasks
            .push(task);
        self.check_partition();
    }

    /// Remove a task by id from whichever column holds it.
    pub fn remove_task(&mut self, task_id: &str) -> Option<Task> {
        for column in &mut self.columns {
            if let Some(pos) = column.tasks.iter().position(|t| t.id == task_id) {
                return Some(column.tasks.remove(pos));
            }
        }
        None
    }

    /// Move a task to the end of another column, rewriting its status.
    /// Unknown id is a stale reference and a no-op.
    pub fn relocate_task(&mut self, task_id: &str, status: TaskStatus) -> bool {
        let Some(mut task) = self.remove_task(task_id) else {
            return false;
        };
        task.move_to_status(status);
        self.push_task(task);
        true
    }

    /// Board consistency is a precondition for every other component:
    /// each task id lives in exactly one column and its status matches
    /// that column. Violations are logic defects, so this fails loudly in
    /// development builds rather than degrading.
    #[cfg(debug_assertions)]
    fn check_partition(&self) {
        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            for task in &column.tasks {
                assert_eq!(
                    task.status, column.id,
                    "task {} has status {:?} but sits in column {:?}",
                    task.id, task.status, column.id
                );
                assert!(
                    seen.insert(task.id.as_str()),
                    "task {} appears in more than one column",
                    task.id
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_partition(&self) {}
}
