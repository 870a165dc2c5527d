//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Member details report storage (flat file, in-memory)

pub mod storage;

pub use storage::{FlatFileSnapshotStore, InMemorySnapshotStore};
