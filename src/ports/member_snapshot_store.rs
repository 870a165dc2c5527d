//! Member snapshot store port.
//!
//! Defines how the whole directory is written out as a member details
//! report and read back for display. The report is a flat, one-row-per-member
//! view carrying display values (active status, prices, balances); it is not
//! a way to restore members, so loading yields rows, not `Member`s.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{MemberId, Money};
use crate::domain::membership::{Member, MemberKind, MemberProfile};

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("No member details found at {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Payment columns, present for premium members only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementColumns {
    pub full_payment: bool,
    pub paid_amount: Money,
    pub remaining_amount: Money,
    pub discount_amount: Money,
}

/// One member as it appears in the member details report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRow {
    pub id: MemberId,
    pub profile: MemberProfile,
    pub kind: MemberKind,
    /// Plan tier for regular members, trainer name for premium members.
    pub plan_or_trainer: String,
    /// Plan price, or the fixed charge for premium members.
    pub price: Money,
    pub active: bool,
    pub settlement: Option<SettlementColumns>,
}

impl MemberRow {
    /// "Active" / "Inactive"
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl From<&Member> for MemberRow {
    fn from(member: &Member) -> Self {
        let (plan_or_trainer, price, settlement) = match member {
            Member::MeteredPlan(m) => (m.plan().name().to_string(), m.price(), None),
            Member::Prepaid(m) => (
                m.personal_trainer().to_string(),
                m.fixed_charge(),
                Some(SettlementColumns {
                    full_payment: m.is_payment_complete(),
                    paid_amount: m.paid_amount(),
                    remaining_amount: m.remaining_amount(),
                    discount_amount: m.discount_amount(),
                }),
            ),
        };

        Self {
            id: member.id(),
            profile: member.profile().clone(),
            kind: member.kind(),
            plan_or_trainer,
            price,
            active: member.is_active(),
            settlement,
        }
    }
}

/// Port for writing and reading the member details report.
#[async_trait]
pub trait MemberSnapshotStore: Send + Sync {
    /// Replace the stored report with `rows`.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError::IoError` if the report cannot be written
    async fn save(&self, rows: &[MemberRow]) -> Result<(), SnapshotStoreError>;

    /// Read the stored report.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError::NotFound` if nothing has been saved yet
    async fn load(&self) -> Result<Vec<MemberRow>, SnapshotStoreError>;

    /// Human-readable location of the report, for operator messages.
    fn location(&self) -> String;
}
