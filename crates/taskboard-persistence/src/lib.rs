pub mod backend;
pub mod gateway;

pub use backend::{keys, FileBackend, MemoryBackend, StorageBackend};
pub use gateway::StorageGateway;
