//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ModelStorage` - Named snapshot persistence for the decision model

mod model_storage;

pub use model_storage::{ModelStorage, ModelStorageError};
