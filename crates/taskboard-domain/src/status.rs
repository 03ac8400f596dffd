use serde::{Deserialize, Serialize};

/// Column identifier. The set is fixed: every task on the board belongs
/// to exactly one of these six statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Todo,
    InProgress,
    InReview,
    Blocked,
    OnHold,
    Completed,
}

impl TaskStatus {
    /// All statuses in board display order.
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Blocked,
        TaskStatus::OnHold,
        TaskStatus::Completed,
    ];

    /// Wire identifier as used by the drag library and the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::InReview => "inReview",
            TaskStatus::Blocked => "blocked",
            TaskStatus::OnHold => "onHold",
            TaskStatus::Completed => "completed",
        }
    }

    /// Resolve a wire identifier. Drag payloads carry column ids as plain
    /// strings, so an unknown id is possible and maps to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "inProgress" => Some(TaskStatus::InProgress),
            "inReview" => Some(TaskStatus::InReview),
            "blocked" => Some(TaskStatus::Blocked),
            "onHold" => Some(TaskStatus::OnHold),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Display label for the column header.
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::Completed => "Completed",
        }
    }
}
