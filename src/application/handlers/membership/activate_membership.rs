//! ActivateMembershipHandler - Command handler for activating memberships.

use tracing::info;

use crate::application::SharedDirectory;
use crate::domain::foundation::MemberId;
use crate::domain::membership::MembershipError;

/// Command to activate a member.
#[derive(Debug, Clone)]
pub struct ActivateMembershipCommand {
    pub member_id: MemberId,
}

/// Result of successful activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateMembershipResult {
    pub member_id: MemberId,
    /// False if the member was already active.
    pub changed: bool,
}

/// Handler for activating memberships.
///
/// Activation is idempotent and does not touch attendance or points.
pub struct ActivateMembershipHandler {
    directory: SharedDirectory,
}

impl ActivateMembershipHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: ActivateMembershipCommand,
    ) -> Result<ActivateMembershipResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        let changed = !member.is_active();
        member.activate();

        info!(member_id = %cmd.member_id, changed, "Membership activated");
        Ok(ActivateMembershipResult {
            member_id: cmd.member_id,
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::membership::test_support::{directory_with, regular};

    #[tokio::test]
    async fn activates_inactive_member() {
        let directory = directory_with(vec![regular(1).into()]);
        let handler = ActivateMembershipHandler::new(directory.clone());

        let result = handler
            .handle(ActivateMembershipCommand {
                member_id: MemberId::new(1),
            })
            .await
            .unwrap();

        assert!(result.changed);
        assert!(directory.read().await.lookup(MemberId::new(1)).unwrap().is_active());
    }

    #[tokio::test]
    async fn activating_twice_is_a_no_op() {
        let directory = directory_with(vec![regular(1).into()]);
        let handler = ActivateMembershipHandler::new(directory);
        let cmd = ActivateMembershipCommand {
            member_id: MemberId::new(1),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert!(!second.changed);
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let handler = ActivateMembershipHandler::new(directory_with(vec![]));

        let err = handler
            .handle(ActivateMembershipCommand {
                member_id: MemberId::new(404),
            })
            .await
            .unwrap_err();

        assert_eq!(err, MembershipError::not_found(MemberId::new(404)));
    }
}
