//! Payment settlement state machine for prepaid members.
//!
//! A prepaid member owes a single fixed charge and may settle it in any
//! number of instalments. Settlement only moves forward; the one way back
//! to `Unpaid` is a full revert of the member.

use crate::domain::foundation::{Money, StateMachine};
use serde::{Deserialize, Serialize};

/// Settlement state of a prepaid member's fixed charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing paid yet.
    #[default]
    Unpaid,

    /// Some amount paid, balance outstanding.
    PartiallyPaid,

    /// Paid amount equals the fixed charge exactly.
    PaidInFull,
}

impl PaymentStatus {
    /// Status implied by a paid total against the charge.
    ///
    /// Callers must never pass `paid > charge`; the overpayment guard in
    /// `PrepaidMember::record_payment` runs first.
    pub fn for_balance(paid: Money, charge: Money) -> Self {
        if paid == charge {
            PaymentStatus::PaidInFull
        } else if paid.is_zero() {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::PartiallyPaid
        }
    }

    pub fn is_paid_in_full(&self) -> bool {
        matches!(self, PaymentStatus::PaidInFull)
    }
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, target),
            // A zero-rupee instalment leaves the member unpaid
            (Unpaid, Unpaid)
                | (Unpaid, PartiallyPaid)
                | (Unpaid, PaidInFull)
                | (PartiallyPaid, PartiallyPaid)
                | (PartiallyPaid, PaidInFull)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStatus::*;
        match self {
            Unpaid => vec![Unpaid, PartiallyPaid, PaidInFull],
            PartiallyPaid => vec![PartiallyPaid, PaidInFull],
            PaidInFull => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge() -> Money {
        Money::from_rupees(50_000)
    }

    // for_balance

    #[test]
    fn zero_paid_is_unpaid() {
        assert_eq!(PaymentStatus::for_balance(Money::ZERO, charge()), PaymentStatus::Unpaid);
    }

    #[test]
    fn some_paid_is_partially_paid() {
        assert_eq!(
            PaymentStatus::for_balance(Money::from_rupees(1), charge()),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(
            PaymentStatus::for_balance(Money::from_paise(4_999_999), charge()),
            PaymentStatus::PartiallyPaid
        );
    }

    #[test]
    fn exact_charge_is_paid_in_full() {
        assert_eq!(PaymentStatus::for_balance(charge(), charge()), PaymentStatus::PaidInFull);
    }

    // Transitions

    #[test]
    fn unpaid_can_settle_in_one_payment() {
        assert_eq!(
            PaymentStatus::Unpaid.transition_to(PaymentStatus::PaidInFull),
            Ok(PaymentStatus::PaidInFull)
        );
    }

    #[test]
    fn partially_paid_cannot_return_to_unpaid() {
        assert!(!PaymentStatus::PartiallyPaid.can_transition_to(&PaymentStatus::Unpaid));
        assert!(PaymentStatus::PartiallyPaid
            .transition_to(PaymentStatus::Unpaid)
            .is_err());
    }

    #[test]
    fn paid_in_full_is_terminal() {
        assert!(PaymentStatus::PaidInFull.is_terminal());
        assert!(!PaymentStatus::Unpaid.is_terminal());
        assert!(!PaymentStatus::PartiallyPaid.is_terminal());
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            PaymentStatus::Unpaid,
            PaymentStatus::PartiallyPaid,
            PaymentStatus::PaidInFull,
        ] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    target
                );
            }
        }
    }
}
