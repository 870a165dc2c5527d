//! SaveMemberDetailsHandler - Command handler for writing the member details report.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::SharedDirectory;
use crate::domain::membership::MembershipError;
use crate::ports::{MemberRow, MemberSnapshotStore};

/// Command to write every member to the report.
#[derive(Debug, Clone, Default)]
pub struct SaveMemberDetailsCommand;

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMemberDetailsResult {
    pub saved: usize,
    pub location: String,
}

/// Handler for saving member details.
///
/// Rows are taken under the read lock and written after it is released.
pub struct SaveMemberDetailsHandler {
    directory: SharedDirectory,
    store: Arc<dyn MemberSnapshotStore>,
}

impl SaveMemberDetailsHandler {
    pub fn new(directory: SharedDirectory, store: Arc<dyn MemberSnapshotStore>) -> Self {
        Self { directory, store }
    }

    pub async fn handle(
        &self,
        _cmd: SaveMemberDetailsCommand,
    ) -> Result<SaveMemberDetailsResult, MembershipError> {
        let rows: Vec<MemberRow> = {
            let directory = self.directory.read().await;
            directory.all().map(MemberRow::from).collect()
        };

        if rows.is_empty() {
            return Err(MembershipError::validation("members", "No members to save"));
        }

        self.store.save(&rows).await.map_err(|e| {
            error!(error = %e, "Failed to save member details");
            MembershipError::infrastructure(format!("Error saving member details: {}", e))
        })?;

        let location = self.store.location();
        info!(saved = rows.len(), location = %location, "Member details saved");
        Ok(SaveMemberDetailsResult {
            saved: rows.len(),
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySnapshotStore;
    use crate::application::handlers::membership::test_support::{directory_with, premium, regular};
    use crate::domain::foundation::ErrorCode;
    use crate::ports::SnapshotStoreError;
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingStore;

    #[async_trait]
    impl MemberSnapshotStore for FailingStore {
        async fn save(&self, _rows: &[MemberRow]) -> Result<(), SnapshotStoreError> {
            Err(SnapshotStoreError::IoError("disk full".to_string()))
        }

        async fn load(&self) -> Result<Vec<MemberRow>, SnapshotStoreError> {
            Ok(vec![])
        }

        fn location(&self) -> String {
            "nowhere".to_string()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn saves_every_member() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let handler = SaveMemberDetailsHandler::new(
            directory_with(vec![regular(1).into(), premium(2).into()]),
            store.clone(),
        );

        let result = handler.handle(SaveMemberDetailsCommand).await.unwrap();

        assert_eq!(result.saved, 2);
        assert_eq!(result.location, "memory");
        assert_eq!(store.row_count().await, 2);
    }

    #[tokio::test]
    async fn empty_directory_is_rejected() {
        let store = Arc::new(InMemorySnapshotStore::new());
        let handler = SaveMemberDetailsHandler::new(directory_with(vec![]), store.clone());

        let err = handler.handle(SaveMemberDetailsCommand).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "No members to save");
        assert_eq!(store.row_count().await, 0);
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure_error() {
        let handler =
            SaveMemberDetailsHandler::new(directory_with(vec![regular(1).into()]), Arc::new(FailingStore));

        let err = handler.handle(SaveMemberDetailsCommand).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("disk full"));
    }
}
