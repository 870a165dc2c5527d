//! Success results of membership operations.
//!
//! Each outcome carries the numbers the caller needs and renders the
//! confirmation text shown at the front desk through `Display`.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Money;

use super::{MemberKind, PlanTier};

/// A metered member moved to a new tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradeOutcome {
    pub tier: PlanTier,
    pub price: Money,
}

impl fmt::Display for UpgradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plan upgraded to {} at price {}", self.tier, self.price)
    }
}

/// A prepaid instalment was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// This payment settled the charge.
    Completed { paid: Money },

    /// Balance still outstanding.
    PartiallyPaid { paid: Money, remaining: Money },
}

impl PaymentOutcome {
    pub fn paid(&self) -> Money {
        match self {
            PaymentOutcome::Completed { paid } | PaymentOutcome::PartiallyPaid { paid, .. } => {
                *paid
            }
        }
    }

    pub fn remaining(&self) -> Money {
        match self {
            PaymentOutcome::Completed { .. } => Money::ZERO,
            PaymentOutcome::PartiallyPaid { remaining, .. } => *remaining,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PaymentOutcome::Completed { .. })
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOutcome::Completed { .. } => {
                write!(f, "Payment successful. Payment completed in full!")
            }
            PaymentOutcome::PartiallyPaid { remaining, .. } => write!(
                f,
                "Payment successful. Remaining amount to be paid: {}",
                remaining
            ),
        }
    }
}

/// The post-payment discount was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountOutcome {
    pub amount: Money,
}

impl fmt::Display for DiscountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Discount calculated successfully. Discount amount: {}",
            self.amount
        )
    }
}

/// A member was reverted to a fresh baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevertOutcome {
    pub kind: MemberKind,
    /// Removal reason, recorded for metered members only.
    pub reason: Option<String>,
}

impl fmt::Display for RevertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "Member reverted successfully. Reason: {}", reason),
            None => write!(f, "{} member reverted successfully.", self.kind.label()),
        }
    }
}
