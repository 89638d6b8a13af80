//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers take the model's write lock, query handlers the read lock.

pub mod handlers;

pub use handlers::model::{shared_model, SharedModel};
