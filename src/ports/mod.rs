//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `MemberSnapshotStore` - Writes and reads the member details report

mod member_snapshot_store;

pub use member_snapshot_store::{
    MemberRow, MemberSnapshotStore, SettlementColumns, SnapshotStoreError,
};
