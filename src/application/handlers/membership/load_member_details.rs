//! LoadMemberDetailsHandler - Query handler for reading the member details report.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::membership::{MemberKind, MembershipError};
use crate::ports::{MemberRow, MemberSnapshotStore, SnapshotStoreError};

/// Query for the saved report.
#[derive(Debug, Clone, Default)]
pub struct LoadMemberDetailsQuery;

/// Saved rows, split by member kind for the two report tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDetailsReport {
    pub regular: Vec<MemberRow>,
    pub premium: Vec<MemberRow>,
}

impl MemberDetailsReport {
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.premium.is_empty()
    }
}

/// Handler for loading member details.
///
/// Reads the report only; the in-memory directory is left untouched.
pub struct LoadMemberDetailsHandler {
    store: Arc<dyn MemberSnapshotStore>,
}

impl LoadMemberDetailsHandler {
    pub fn new(store: Arc<dyn MemberSnapshotStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        _query: LoadMemberDetailsQuery,
    ) -> Result<MemberDetailsReport, MembershipError> {
        let rows = self.store.load().await.map_err(|e| {
            warn!(error = %e, "Failed to load member details");
            match e {
                SnapshotStoreError::NotFound(location) => MembershipError::validation(
                    "member_details",
                    format!("No member details found at {}", location),
                ),
                SnapshotStoreError::IoError(msg) => {
                    MembershipError::infrastructure(format!("Error loading member details: {}", msg))
                }
            }
        })?;

        let (regular, premium): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .partition(|row| row.kind == MemberKind::MeteredPlan);

        info!(regular = regular.len(), premium = premium.len(), "Member details loaded");
        Ok(MemberDetailsReport { regular, premium })
    }
}
