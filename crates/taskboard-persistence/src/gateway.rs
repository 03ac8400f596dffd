//! The persistence gateway: tolerant reads and writes of the task
//! collection and the active-user marker.
//!
//! Storage failure never propagates to the caller. A corrupt or missing
//! task list reads as empty, and a failed write is logged and dropped —
//! the in-memory board stays the source of truth for the session.

use taskboard_domain::Task;

use crate::backend::{keys, StorageBackend};

pub struct StorageGateway<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> StorageGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the persisted task list. Absent key, unreadable storage, and
    /// parse failures all degrade to an empty list.
    pub async fn get_tasks(&self) -> Vec<Task> {
        let text = match self.backend.read(keys::TASKS).await {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read tasks from storage: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(tasks) => drop_duplicate_ids(tasks),
            Err(e) => {
                tracing::warn!("Stored task list is corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted task list. Failures are logged, not raised.
    pub async fn set_tasks(&self, tasks: &[Task]) {
        let text = match serde_json::to_string(tasks) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to serialize tasks: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write(keys::TASKS, &text).await {
            tracing::warn!("Failed to save tasks to storage: {}", e);
        }
    }

    pub async fn clear_tasks(&self) {
        if let Err(e) = self.backend.remove(keys::TASKS).await {
            tracing::warn!("Failed to clear tasks from storage: {}", e);
        }
    }

    pub async fn get_user(&self) -> Option<String> {
        match self.backend.read(keys::USER).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to read user from storage: {}", e);
                None
            }
        }
    }

    pub async fn set_user(&self, email: &str) {
        if let Err(e) = self.backend.write(keys::USER, email).await {
            tracing::warn!("Failed to save user to storage: {}", e);
        }
    }

    pub async fn remove_user(&self) {
        if let Err(e) = self.backend.remove(keys::USER).await {
            tracing::warn!("Failed to remove user from storage: {}", e);
        }
    }
}

/// Stored data is untrusted even when it parses: a list carrying the
/// same id twice would put one task in two columns and break the board
/// partition on load. Keep the first occurrence, log the rest away.
fn drop_duplicate_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::with_capacity(tasks.len());
    for task in tasks {
        if seen.insert(task.id.clone()) {
            unique.push(task);
        } else {
            tracing::warn!("Dropping stored task with duplicate id {}", task.id);
        }
    }
    unique
}
