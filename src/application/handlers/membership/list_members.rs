//! ListMembersHandler - Query handler for all members.

use crate::application::SharedDirectory;
use crate::domain::membership::{MemberKind, MembershipError};

use super::MemberView;

/// Query for every member, optionally of one kind only.
#[derive(Debug, Clone, Default)]
pub struct ListMembersQuery {
    pub kind: Option<MemberKind>,
}

pub type ListMembersResult = Vec<MemberView>;

/// Handler for listing members in enrollment order.
pub struct ListMembersHandler {
    directory: SharedDirectory,
}

impl ListMembersHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: ListMembersQuery) -> Result<ListMembersResult, MembershipError> {
        let directory = self.directory.read().await;
        Ok(directory
            .all()
            .filter(|m| query.kind.map_or(true, |kind| m.kind() == kind))
            .map(MemberView::from)
            .collect())
    }
}
