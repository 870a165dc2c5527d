//! DeactivateMembershipHandler - Command handler for deactivating memberships.

use tracing::info;

use crate::application::SharedDirectory;
use crate::domain::foundation::MemberId;
use crate::domain::membership::MembershipError;

/// Command to deactivate a member.
#[derive(Debug, Clone)]
pub struct DeactivateMembershipCommand {
    pub member_id: MemberId,
}

/// Result of successful deactivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeactivateMembershipResult {
    pub member_id: MemberId,
    /// False if the member was already inactive.
    pub changed: bool,
}

/// Handler for deactivating memberships.
///
/// Attendance, points and payments are kept; an inactive member simply
/// cannot check in or upgrade until reactivated.
pub struct DeactivateMembershipHandler {
    directory: SharedDirectory,
}

impl DeactivateMembershipHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: DeactivateMembershipCommand,
    ) -> Result<DeactivateMembershipResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        let changed = member.is_active();
        member.deactivate();

        info!(member_id = %cmd.member_id, changed, "Membership deactivated");
        Ok(DeactivateMembershipResult {
            member_id: cmd.member_id,
            changed,
        })
    }
}
