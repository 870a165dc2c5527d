//! PayDueAmountHandler - Command handler for premium instalments.

use tracing::{debug, info, warn};

use crate::application::SharedDirectory;
use crate::domain::foundation::{MemberId, Money};
use crate::domain::membership::{MembershipError, PaymentOutcome};

/// Command to pay part or all of a premium member's charge.
#[derive(Debug, Clone)]
pub struct PayDueAmountCommand {
    pub member_id: MemberId,
    pub amount: Money,
}

/// Result of an accepted payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayDueAmountResult {
    pub member_id: MemberId,
    pub outcome: PaymentOutcome,
}

/// Handler for premium payments.
///
/// Payments are accepted from inactive members too.
pub struct PayDueAmountHandler {
    directory: SharedDirectory,
}

impl PayDueAmountHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: PayDueAmountCommand,
    ) -> Result<PayDueAmountResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        let outcome = member
            .as_prepaid_mut("pay due amounts")
            .and_then(|premium| premium.record_payment(cmd.amount))
            .map_err(|e| {
                if e.is_business_outcome() {
                    debug!(member_id = %cmd.member_id, amount = %cmd.amount, error = %e, "Payment rejected");
                } else {
                    warn!(member_id = %cmd.member_id, amount = %cmd.amount, error = %e, "Payment failed");
                }
                e
            })?;

        info!(
            member_id = %cmd.member_id,
            amount = %cmd.amount,
            paid = %outcome.paid(),
            completed = outcome.is_completed(),
            "Payment recorded"
        );
        Ok(PayDueAmountResult {
            member_id: cmd.member_id,
            outcome,
        })
    }
}
