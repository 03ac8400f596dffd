use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::TaskStatus;

pub type TaskId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: String,
    pub content: String,
    pub completed: bool,
}

impl SubTask {
    pub fn new(content: String) -> Self {
        Self {
            id: generate_id("subtask"),
            content,
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: String) -> Self {
        Self {
            id: generate_id("checklist"),
            text,
            checked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: String, content: String) -> Self {
        Self {
            id: generate_id("comment"),
            author,
            content,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    #[serde(default)]
    pub blocked_by: Vec<TaskId>,
    #[serde(default)]
    pub blocking: Vec<TaskId>,
}

/// A single work item. `id` is unique across the whole board and never
/// changes after creation; `status` always matches the owning column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub dependencies: Dependencies,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field set accepted by the add-task form. Everything except the title
/// is optional; new tasks always start in the todo column.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub content: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id("task"),
            content: draft.content,
            status: TaskStatus::Todo,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            assignee: draft.assignee,
            labels: draft.labels,
            subtasks: Vec::new(),
            checklist: Vec::new(),
            comments: Vec::new(),
            dependencies: Dependencies::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rewrite the status during a cross-column move.
    pub fn move_to_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn add_subtask(&mut self, content: String) -> &SubTask {
        self.subtasks.push(SubTask::new(content));
        self.updated_at = Utc::now();
        self.subtasks.last().unwrap()
    }

    /// Flip one subtask's completion flag. Returns false when the id is
    /// not present (stale reference).
    pub fn toggle_subtask(&mut self, subtask_id: &str) -> bool {
        match self.subtasks.iter_mut().find(|st| st.id == subtask_id) {
            Some(subtask) => {
                subtask.completed = !subtask.completed;
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn add_checklist_item(&mut self, text: String) -> &ChecklistItem {
        self.checklist.push(ChecklistItem::new(text));
        self.updated_at = Utc::now();
        self.checklist.last().unwrap()
    }

    pub fn toggle_checklist_item(&mut self, item_id: &str) -> bool {
        match self.checklist.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.checked = !item.checked;
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn add_comment(&mut self, author: String, content: String) -> &Comment {
        self.comments.push(Comment::new(author, content));
        self.updated_at = Utc::now();
        self.comments.last().unwrap()
    }
}

fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str) -> TaskDraft {
        TaskDraft {
            content: content.to_string(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn test_new_task_starts_in_todo() {
        let task = Task::new(draft("Write docs"));
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.subtasks.is_empty());
        assert!(task.checklist.is_empty());
        assert!(task.comments.is_empty());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Task::new(draft("a"));
        let b = Task::new(draft("b"));
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("task-"));
    }

    #[test]
    fn test_toggle_subtask() {
        let mut task = Task::new(draft("Release"));
        let subtask_id = task.add_subtask("Tag version".to_string()).id.clone();

        assert!(task.toggle_subtask(&subtask_id));
        assert!(task.subtasks[0].completed);

        assert!(task.toggle_subtask(&subtask_id));
        assert!(!task.subtasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_subtask_is_noop() {
        let mut task = Task::new(draft("Release"));
        task.add_subtask("Tag version".to_string());
        let before = task.clone();

        assert!(!task.toggle_subtask("subtask-missing"));
        assert_eq!(task, before);
    }

    #[test]
    fn test_toggle_checklist_item() {
        let mut task = Task::new(draft("Ship"));
        let item_id = task.add_checklist_item("Update changelog".to_string()).id.clone();

        assert!(task.toggle_checklist_item(&item_id));
        assert!(task.checklist[0].checked);
    }

    #[test]
    fn test_serde_shape_matches_persisted_form() {
        let mut task = Task::new(draft("Fix bug"));
        task.due_date = Some("2026-09-01".to_string());
        task.dependencies.blocked_by.push("task-other".to_string());

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "todo");
        assert_eq!(value["dueDate"], "2026-09-01");
        assert_eq!(value["dependencies"]["blockedBy"][0], "task-other");
        assert!(value.get("createdAt").is_some());
        // Unset optionals stay off the wire entirely.
        assert!(value.get("assignee").is_none());
    }

    #[test]
    fn test_deserialize_tolerates_missing_collections() {
        let json = r#"{
            "id": "task-1",
            "content": "Legacy task",
            "status": "inReview",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InReview);
        assert!(task.subtasks.is_empty());
        assert!(task.dependencies.blocked_by.is_empty());
    }
}
