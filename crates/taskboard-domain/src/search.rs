//! Search filtering over the board.
//!
//! A read-only projection: column structure and in-column order are
//! preserved, the underlying board is never mutated.

use crate::board::Board;
use crate::status::TaskStatus;
use crate::task::Task;

/// Case-insensitive substring query over title, description, and labels.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    query: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        if task.content.to_lowercase().contains(&self.query) {
            return true;
        }
        if let Some(description) = &task.description {
            if description.to_lowercase().contains(&self.query) {
                return true;
            }
        }
        task.labels
            .iter()
            .any(|label| label.to_lowercase().contains(&self.query))
    }
}

/// Borrowed per-column view of the matching tasks.
#[derive(Debug)]
pub struct ColumnView<'a> {
    pub id: TaskStatus,
    pub title: &'a str,
    pub tasks: Vec<&'a Task>,
}

/// Project the board through a search query, column by column.
pub fn filter_board<'a>(board: &'a Board, query: &SearchQuery) -> Vec<ColumnView<'a>> {
    board
        .columns()
        .iter()
        .map(|column| ColumnView {
            id: column.id,
            title: &column.title,
            tasks: column.tasks.iter().filter(|t| query.matches(t)).collect(),
        })
        .collect()
}
