//! The mutation coordinator.
//!
//! `BoardSession` owns the single in-memory board for the UI session and
//! is the only path through which view code mutates it. Every
//! state-changing operation runs to completion before returning: mutate
//! the board, then write the full flattened task list through the
//! persistence gateway. The board and the durable store never observably
//! diverge between two coordinator calls; a failed write is absorbed by
//! the gateway and the in-memory board stays authoritative.

use taskboard_core::{AppConfig, TaskboardError, TaskboardResult};
use taskboard_domain::{
    drag, filter_board, Board, ColumnView, DragResult, SearchQuery, Task, TaskDraft, TaskUpdate,
};
use taskboard_persistence::{FileBackend, StorageBackend, StorageGateway};

pub struct BoardSession<B: StorageBackend> {
    board: Board,
    gateway: StorageGateway<B>,
}

impl BoardSession<FileBackend> {
    /// Open a file-backed session over the configured data directory.
    pub async fn open_default() -> TaskboardResult<Self> {
        let config = AppConfig::load();
        let data_dir = config.effective_data_dir().ok_or_else(|| {
            TaskboardError::Internal("no data directory available on this platform".to_string())
        })?;
        Ok(Self::load(StorageGateway::new(FileBackend::new(data_dir))).await)
    }
}

impl<B: StorageBackend> BoardSession<B> {
    /// Rebuild the board from persisted storage.
    pub async fn load(gateway: StorageGateway<B>) -> Self {
        let tasks = gateway.get_tasks().await;
        Self {
            board: Board::from_tasks(tasks),
            gateway,
        }
    }

    /// Read-only snapshot for the rendering layer.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn gateway(&self) -> &StorageGateway<B> {
        &self.gateway
    }

    /// Search projection over the current board.
    pub fn filtered(&self, query: &SearchQuery) -> Vec<ColumnView<'_>> {
        filter_board(&self.board, query)
    }

    /// Create a task in the todo column. Returns the new task's id, or
    /// `None` when the title is empty after trimming (the add dialog
    /// stays open, nothing is written).
    pub async fn add_task(&mut self, draft: TaskDraft) -> Option<String> {
        if draft.content.trim().is_empty() {
            return None;
        }
        let task = Task::new(draft);
        let id = task.id.clone();
        self.board.push_task(task);
        self.persist().await;
        Some(id)
    }

    /// Merge a partial update into the task matched by id. An unknown id
    /// is a stale reference and a silent no-op, as is an update that
    /// would blank the title. An explicit status change relocates the
    /// task to the end of the target column.
    pub async fn update_task(&mut self, task_id: &str, update: TaskUpdate) -> bool {
        if matches!(&update.content, Some(content) if content.trim().is_empty()) {
            return false;
        }
        let Some(current) = self.board.find_task(task_id) else {
            tracing::debug!("Update targeted vanished task {}", task_id);
            return false;
        };
        let new_status = if update.changes_status(current.status) {
            update.status
        } else {
            None
        };

        let Some(task) = self.board.find_task_mut(task_id) else {
            return false;
        };
        update.apply_to(task);
        if let Some(status) = new_status {
            self.board.relocate_task(task_id, status);
        }
        self.persist().await;
        true
    }

    /// Remove the task from whichever column holds it.
    pub async fn delete_task(&mut self, task_id: &str) -> bool {
        if self.board.remove_task(task_id).is_none() {
            return false;
        }
        self.persist().await;
        true
    }

    /// Run the drag-transition engine. Persists only when a transition
    /// actually occurred; invalid or unchanged drops write nothing.
    pub async fn apply_drag(&mut self, result: &DragResult) -> bool {
        match drag::apply_drag(&self.board, result) {
            Some(next) => {
                self.board = next;
                self.persist().await;
                true
            }
            None => false,
        }
    }

    pub async fn add_subtask(&mut self, task_id: &str, content: String) -> Option<String> {
        if content.trim().is_empty() {
            return None;
        }
        let task = self.board.find_task_mut(task_id)?;
        let id = task.add_subtask(content).id.clone();
        self.persist().await;
        Some(id)
    }

    pub async fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let Some(task) = self.board.find_task_mut(task_id) else {
            return false;
        };
        if !task.toggle_subtask(subtask_id) {
            return false;
        }
        self.persist().await;
        true
    }

    pub async fn add_checklist_item(&mut self, task_id: &str, text: String) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        let task = self.board.find_task_mut(task_id)?;
        let id = task.add_checklist_item(text).id.clone();
        self.persist().await;
        Some(id)
    }

    pub async fn toggle_checklist_item(&mut self, task_id: &str, item_id: &str) -> bool {
        let Some(task) = self.board.find_task_mut(task_id) else {
            return false;
        };
        if !task.toggle_checklist_item(item_id) {
            return false;
        }
        self.persist().await;
        true
    }

    pub async fn add_comment(
        &mut self,
        task_id: &str,
        author: String,
        content: String,
    ) -> Option<String> {
        if content.trim().is_empty() {
            return None;
        }
        let task = self.board.find_task_mut(task_id)?;
        let id = task.add_comment(author, content).id.clone();
        self.persist().await;
        Some(id)
    }

    /// Store the active-user marker. The email must be non-empty after
    /// trimming; form-level validation lives with the form.
    pub async fn login(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() {
            return false;
        }
        self.gateway.set_user(email).await;
        true
    }

    /// Remove the user marker and clear the persisted tasks, leaving an
    /// empty board for the next session.
    pub async fn logout(&mut self) {
        self.gateway.remove_user().await;
        self.gateway.clear_tasks().await;
        self.board = Board::new();
    }

    pub async fn current_user(&self) -> Option<String> {
        self.gateway.get_user().await
    }

    async fn persist(&self) {
        self.gateway.set_tasks(&self.board.all_tasks()).await;
    }
}
