//! UpgradePlanHandler - Command handler for moving regular members between plans.

use tracing::{debug, info};

use crate::application::SharedDirectory;
use crate::domain::foundation::MemberId;
use crate::domain::membership::{MembershipError, UpgradeOutcome};

/// Command to move a regular member to another plan tier.
#[derive(Debug, Clone)]
pub struct UpgradePlanCommand {
    pub member_id: MemberId,
    /// Tier name as typed; matched case-insensitively.
    pub requested_plan: String,
}

/// Result of a successful plan change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePlanResult {
    pub member_id: MemberId,
    pub outcome: UpgradeOutcome,
}

/// Handler for plan upgrades.
///
/// Premium members have no plan tiers, and inactive members cannot change
/// plans. Eligibility and tier checks belong to the member.
pub struct UpgradePlanHandler {
    directory: SharedDirectory,
}

impl UpgradePlanHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, cmd: UpgradePlanCommand) -> Result<UpgradePlanResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        let active = member.is_active();
        let outcome = member
            .as_metered_mut("upgrade plans")
            .and_then(|regular| {
                if !active {
                    return Err(MembershipError::member_inactive_for(
                        cmd.member_id,
                        "upgrade plan",
                    ));
                }
                regular.upgrade_plan(&cmd.requested_plan)
            })
            .map_err(|e| {
                debug!(member_id = %cmd.member_id, requested = %cmd.requested_plan, error = %e, "Upgrade rejected");
                e
            })?;

        info!(member_id = %cmd.member_id, tier = %outcome.tier, price = %outcome.price, "Plan upgraded");
        Ok(UpgradePlanResult {
            member_id: cmd.member_id,
            outcome,
        })
    }
}
