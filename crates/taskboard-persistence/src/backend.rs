use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use taskboard_core::{TaskboardError, TaskboardResult};

/// The two logical keys the board uses.
pub mod keys {
    /// Active-user marker (an email, or absent when logged out).
    pub const USER: &str = "user";
    /// The full task collection, serialized as a JSON list.
    pub const TASKS: &str = "tasks";
}

/// Abstract key-value storage. Implementations back the gateway with a
/// file per key, memory for tests, etc.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn read(&self, key: &str) -> TaskboardResult<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> TaskboardResult<()>;
    async fn remove(&self, key: &str) -> TaskboardResult<()>;
}

#[async_trait]
impl<B: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<B> {
    async fn read(&self, key: &str) -> TaskboardResult<Option<String>> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> TaskboardResult<()> {
        (**self).write(key, value).await
    }

    async fn remove(&self, key: &str) -> TaskboardResult<()> {
        (**self).remove(key).await
    }
}

/// File-based backend: one file per key under a root directory, written
/// atomically.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Staging file for a key, a sibling of the final file so the
    /// rename below never crosses filesystems.
    fn staging_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.staged"))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn read(&self, key: &str) -> TaskboardResult<Option<String>> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // Stage the full value, then rename over the final file. A crash
    // mid-write leaves a stale .staged sibling, never a truncated store.
    async fn write(&self, key: &str, value: &str) -> TaskboardResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let staging = self.staging_path(key);
        tokio::fs::write(&staging, value.as_bytes()).await?;
        tokio::fs::rename(&staging, self.key_path(key)).await?;
        tracing::debug!("Stored key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskboardResult<()> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory backend for tests. `fail_writes` simulates a full store
/// (quota exceeded) to exercise the gateway's degraded write path.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    write_count: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of write attempts, including failed ones. Lets tests assert
    /// that no-op operations do not re-trigger persistence.
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }

    /// Seed a raw value, bypassing the gateway. Used to stage corrupt data.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, key: &str) -> TaskboardResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> TaskboardResult<()> {
        self.write_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TaskboardError::Internal("storage quota exceeded".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> TaskboardResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
