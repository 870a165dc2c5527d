//! RevertMemberHandler - Command handler for resetting a member to a fresh baseline.

use tracing::{debug, info};

use crate::application::SharedDirectory;
use crate::domain::foundation::MemberId;
use crate::domain::membership::{MemberKind, MembershipError, RevertOutcome};

/// Which kind of revert the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertTarget {
    /// Regular revert; the reason is recorded on the member.
    MeteredPlan { removal_reason: String },
    /// Premium revert; clears trainer, payments and discount.
    Prepaid,
}

impl RevertTarget {
    pub fn kind(&self) -> MemberKind {
        match self {
            RevertTarget::MeteredPlan { .. } => MemberKind::MeteredPlan,
            RevertTarget::Prepaid => MemberKind::Prepaid,
        }
    }
}

/// Command to revert a member.
#[derive(Debug, Clone)]
pub struct RevertMemberCommand {
    pub member_id: MemberId,
    pub target: RevertTarget,
}

/// Result of a successful revert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertMemberResult {
    pub member_id: MemberId,
    pub outcome: RevertOutcome,
}

/// Handler for reverting members.
///
/// The member stays in the directory under the same id; only activity and
/// variant state are reset.
pub struct RevertMemberHandler {
    directory: SharedDirectory,
}

impl RevertMemberHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: RevertMemberCommand,
    ) -> Result<RevertMemberResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        let outcome = match &cmd.target {
            RevertTarget::MeteredPlan { removal_reason } => member
                .as_metered_mut("be reverted as regular members")
                .and_then(|regular| {
                    let reason = removal_reason.trim();
                    if reason.is_empty() {
                        return Err(MembershipError::validation(
                            "removal_reason",
                            "Removal reason cannot be empty",
                        ));
                    }
                    Ok(regular.revert(reason))
                }),
            RevertTarget::Prepaid => member
                .as_prepaid_mut("be reverted as premium members")
                .map(|premium| premium.revert()),
        }
        .map_err(|e| {
            debug!(member_id = %cmd.member_id, target = %cmd.target.kind(), error = %e, "Revert rejected");
            e
        })?;

        info!(member_id = %cmd.member_id, kind = %outcome.kind, "Member reverted");
        Ok(RevertMemberResult {
            member_id: cmd.member_id,
            outcome,
        })
    }
}
