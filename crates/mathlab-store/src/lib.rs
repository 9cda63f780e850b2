//! # mathlab-store
//!
//! The user profile and per-topic progress, persisted as JSON in a
//! key-value string store.

pub mod error;
pub mod profile;
pub mod progress;
pub mod store;

pub use error::StoreError;
pub use profile::{ProfileData, Topic, TopicStatus, UserRecord, TOPICS};
pub use progress::ProgressStore;
pub use store::{default_data_dir, FileStore, KeyValueStore, MemoryStore};
