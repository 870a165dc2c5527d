//! CalculateDiscountHandler - Command handler for the premium completion discount.

use tracing::{debug, info};

use crate::application::SharedDirectory;
use crate::domain::foundation::MemberId;
use crate::domain::membership::{DiscountOutcome, MembershipError};

/// Command to compute a premium member's discount.
#[derive(Debug, Clone)]
pub struct CalculateDiscountCommand {
    pub member_id: MemberId,
}

/// Result of a successful discount calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateDiscountResult {
    pub member_id: MemberId,
    pub outcome: DiscountOutcome,
}

pub struct CalculateDiscountHandler {
    directory: SharedDirectory,
}

impl CalculateDiscountHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: CalculateDiscountCommand,
    ) -> Result<CalculateDiscountResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        let outcome = member
            .as_prepaid_mut("calculate discounts")
            .and_then(|premium| premium.compute_discount())
            .map_err(|e| {
                debug!(member_id = %cmd.member_id, error = %e, "Discount rejected");
                e
            })?;

        info!(member_id = %cmd.member_id, discount = %outcome.amount, "Discount calculated");
        Ok(CalculateDiscountResult {
            member_id: cmd.member_id,
            outcome,
        })
    }
}
