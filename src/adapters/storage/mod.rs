//! Storage Adapters
//!
//! Implementations of the ModelStorage port.
//!
//! ## Available Adapters
//!
//! - **FileModelStorage** - One JSON or YAML file per snapshot
//! - **InMemoryModelStorage** - Snapshots held in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileModelStorage, InMemoryModelStorage};
//!
//! let storage = FileModelStorage::new("./data");
//! let storage = InMemoryModelStorage::new();
//! ```

mod file_model_storage;
mod in_memory_model_storage;

pub use file_model_storage::FileModelStorage;
pub use in_memory_model_storage::InMemoryModelStorage;
