//! Storage Adapters
//!
//! Implementations of the MemberSnapshotStore port for the member details report.
//!
//! ## Available Adapters
//!
//! - **FlatFileSnapshotStore** - Fixed-width text table on disk, with a backup copy
//! - **InMemorySnapshotStore** - Keeps the report in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FlatFileSnapshotStore, InMemorySnapshotStore};
//!
//! // Production: file-based storage
//! let store = FlatFileSnapshotStore::new("MemberDetails.txt", "MemberDetails.bak");
//!
//! // Testing: in-memory storage
//! let store = InMemorySnapshotStore::new();
//! ```

mod flat_file_snapshot_store;
mod in_memory_snapshot_store;

pub use flat_file_snapshot_store::{FlatFileSnapshotStore, DEFAULT_SEPARATOR_WIDTH};
pub use in_memory_snapshot_store::InMemorySnapshotStore;
