//! Adapters - Implementations of port interfaces.
//!
//! - `http` - REST API over the decision model
//! - `storage` - Snapshot storage (files, in-memory)

pub mod http;
pub mod storage;
