//! Platform Crate - Technical Infrastructure
//!
//! Technical foundations shared by the dashboard crates:
//! - Durable client storage (key/value entries that survive restarts)

pub mod storage;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
