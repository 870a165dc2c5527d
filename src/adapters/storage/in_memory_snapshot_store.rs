//! In-Memory Member Snapshot Adapter
//!
//! Keeps the last saved report in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{MemberRow, MemberSnapshotStore, SnapshotStoreError};

/// In-memory storage for the member details report
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    rows: Arc<RwLock<Option<Vec<MemberRow>>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the last saved report (0 if never saved)
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.as_ref().map_or(0, Vec::len)
    }

    /// Forget the saved report
    pub async fn clear(&self) {
        *self.rows.write().await = None;
    }
}

#[async_trait]
impl MemberSnapshotStore for InMemorySnapshotStore {
    async fn save(&self, rows: &[MemberRow]) -> Result<(), SnapshotStoreError> {
        *self.rows.write().await = Some(rows.to_vec());
        Ok(())
    }

    async fn load(&self) -> Result<Vec<MemberRow>, SnapshotStoreError> {
        self.rows
            .read()
            .await
            .clone()
            .ok_or_else(|| SnapshotStoreError::NotFound(self.location()))
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
