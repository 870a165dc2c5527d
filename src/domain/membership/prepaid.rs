//! Prepaid ("premium") member.
//!
//! Premium members owe one fixed charge, may pay it off in instalments, and
//! unlock a 10% discount once it is settled. They earn double loyalty points
//! and have a personal trainer assigned at enrollment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Money, StateMachine};

use super::{
    DiscountOutcome, MemberActivity, MemberKind, MemberProfile, MembershipError, PaymentOutcome,
    PaymentStatus, RevertOutcome,
};

/// One-time premium charge.
pub const PREMIUM_CHARGE: Money = Money::from_rupees(50_000);

/// Discount granted after full payment, in percent of the charge.
pub const DISCOUNT_PERCENT: i64 = 10;

/// Loyalty points awarded per premium visit.
pub const PREMIUM_VISIT_POINTS: u32 = 10;

/// Premium member settling a fixed charge.
///
/// # Invariants
///
/// - `Money::ZERO <= paid_amount <= PREMIUM_CHARGE`
/// - `payment_status == PaidInFull` iff `paid_amount == PREMIUM_CHARGE`
/// - `discount_amount` is non-zero only while paid in full
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepaidMember {
    id: MemberId,
    profile: MemberProfile,
    activity: MemberActivity,
    personal_trainer: String,
    paid_amount: Money,
    payment_status: PaymentStatus,
    discount_amount: Money,
}

impl PrepaidMember {
    /// Enrolls a new premium member with nothing paid, inactive.
    pub fn new(id: MemberId, profile: MemberProfile, personal_trainer: impl Into<String>) -> Self {
        Self {
            id,
            profile,
            activity: MemberActivity::new(),
            personal_trainer: personal_trainer.into(),
            paid_amount: Money::ZERO,
            payment_status: PaymentStatus::Unpaid,
            discount_amount: Money::ZERO,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn activity(&self) -> &MemberActivity {
        &self.activity
    }

    pub fn fixed_charge(&self) -> Money {
        PREMIUM_CHARGE
    }

    /// Empty after a revert.
    pub fn personal_trainer(&self) -> &str {
        &self.personal_trainer
    }

    pub fn paid_amount(&self) -> Money {
        self.paid_amount
    }

    pub fn remaining_amount(&self) -> Money {
        PREMIUM_CHARGE - self.paid_amount
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn is_payment_complete(&self) -> bool {
        self.payment_status.is_paid_in_full()
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    pub fn activate(&mut self) {
        self.activity.activate();
    }

    pub fn deactivate(&mut self) {
        self.activity.deactivate();
    }

    /// Records a visit: +1 attendance, +10 points.
    pub fn mark_attendance(&mut self) {
        self.activity.record_visit(PREMIUM_VISIT_POINTS);
    }

    /// Applies an instalment towards the fixed charge.
    ///
    /// Either the whole amount is credited or nothing is.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `amount` is negative (caller contract violation)
    /// - `AlreadyPaidInFull` if the charge is already settled
    /// - `PaymentOverflow` if the new total would exceed the charge
    pub fn record_payment(&mut self, amount: Money) -> Result<PaymentOutcome, MembershipError> {
        if amount.is_negative() {
            return Err(MembershipError::invalid_input(
                "amount",
                "payment amount cannot be negative",
            ));
        }

        if self.is_payment_complete() {
            return Err(MembershipError::AlreadyPaidInFull);
        }

        let candidate = match self.paid_amount.checked_add(amount) {
            Some(total) if total <= PREMIUM_CHARGE => total,
            _ => return Err(MembershipError::payment_overflow(PREMIUM_CHARGE)),
        };

        let next = PaymentStatus::for_balance(candidate, PREMIUM_CHARGE);
        self.payment_status = self
            .payment_status
            .transition_to(next)
            .map_err(|e| MembershipError::invalid_state_transition(e.to_string()))?;
        self.paid_amount = candidate;

        if self.is_payment_complete() {
            Ok(PaymentOutcome::Completed {
                paid: self.paid_amount,
            })
        } else {
            Ok(PaymentOutcome::PartiallyPaid {
                paid: self.paid_amount,
                remaining: self.remaining_amount(),
            })
        }
    }

    /// Computes the post-payment discount. Recomputing gives the same value.
    ///
    /// # Errors
    ///
    /// `DiscountNotEligible` until the charge is paid in full.
    pub fn compute_discount(&mut self) -> Result<DiscountOutcome, MembershipError> {
        if !self.is_payment_complete() {
            return Err(MembershipError::DiscountNotEligible);
        }

        self.discount_amount = PREMIUM_CHARGE.percent(DISCOUNT_PERCENT);
        Ok(DiscountOutcome {
            amount: self.discount_amount,
        })
    }

    /// Resets activity, payment and discount, and unassigns the trainer.
    /// Identity and profile are kept.
    pub fn revert(&mut self) -> RevertOutcome {
        self.activity.reset();
        self.personal_trainer.clear();
        self.paid_amount = Money::ZERO;
        self.payment_status = PaymentStatus::Unpaid;
        self.discount_amount = Money::ZERO;

        RevertOutcome {
            kind: MemberKind::Prepaid,
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile() -> MemberProfile {
        MemberProfile {
            name: "Bikash Thapa".to_string(),
            location: "Lalitpur".to_string(),
            phone: "9811111111".to_string(),
            email: "bikash@example.com".to_string(),
            gender: "Male".to_string(),
            date_of_birth: "1990/02/28".to_string(),
            membership_start_date: "2024/03/15".to_string(),
        }
    }

    fn member() -> PrepaidMember {
        PrepaidMember::new(MemberId::new(2), profile(), "Coach Ram")
    }

    fn rupees(n: i64) -> Money {
        Money::from_rupees(n)
    }

    // Construction tests

    #[test]
    fn new_member_owes_full_charge() {
        let m = member();
        assert_eq!(m.fixed_charge(), rupees(50_000));
        assert_eq!(m.paid_amount(), Money::ZERO);
        assert_eq!(m.remaining_amount(), rupees(50_000));
        assert_eq!(m.payment_status(), PaymentStatus::Unpaid);
        assert!(!m.is_payment_complete());
        assert_eq!(m.discount_amount(), Money::ZERO);
        assert_eq!(m.personal_trainer(), "Coach Ram");
        assert!(!m.activity().is_active());
    }

    // Attendance tests

    #[test]
    fn attendance_awards_ten_points() {
        let mut m = member();
        m.mark_attendance();
        m.mark_attendance();
        assert_eq!(m.activity().attendance(), 2);
        assert_eq!(m.activity().loyalty_points(), 20);
    }

    // Payment tests

    #[test]
    fn full_payment_in_one_go_completes() {
        let mut m = member();
        let outcome = m.record_payment(rupees(50_000)).unwrap();
        assert!(outcome.is_completed());
        assert!(m.is_payment_complete());
        assert_eq!(m.payment_status(), PaymentStatus::PaidInFull);
    }

    #[test]
    fn partial_payment_reports_remaining_balance() {
        let mut m = member();
        let outcome = m.record_payment(rupees(12_000)).unwrap();
        assert_eq!(
            outcome,
            PaymentOutcome::PartiallyPaid {
                paid: rupees(12_000),
                remaining: rupees(38_000),
            }
        );
        assert_eq!(m.payment_status(), PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn overpayment_is_rejected_without_partial_credit() {
        let mut m = member();
        m.record_payment(rupees(40_000)).unwrap();

        let result = m.record_payment(rupees(20_000));

        assert_eq!(result, Err(MembershipError::payment_overflow(rupees(50_000))));
        assert_eq!(m.paid_amount(), rupees(40_000));
        assert!(!m.is_payment_complete());
    }

    #[test]
    fn payment_near_money_limit_is_overflow_not_wraparound() {
        let mut m = member();
        m.record_payment(rupees(40_000)).unwrap();

        let huge: Money = "92233720368547758.07".parse().unwrap();
        let result = m.record_payment(huge);

        assert_eq!(result, Err(MembershipError::payment_overflow(rupees(50_000))));
        assert_eq!(m.paid_amount(), rupees(40_000));
        assert_eq!(m.payment_status(), PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn instalments_that_sum_exactly_complete_payment() {
        let mut m = member();
        m.record_payment(Money::from_paise(1_666_667)).unwrap();
        m.record_payment(Money::from_paise(1_666_667)).unwrap();
        let outcome = m.record_payment(Money::from_paise(1_666_666)).unwrap();
        assert!(outcome.is_completed());
        assert_eq!(m.paid_amount(), rupees(50_000));
    }

    #[test]
    fn payment_after_completion_is_rejected() {
        let mut m = member();
        m.record_payment(rupees(50_000)).unwrap();
        assert_eq!(
            m.record_payment(Money::ZERO),
            Err(MembershipError::AlreadyPaidInFull)
        );
        assert_eq!(m.paid_amount(), rupees(50_000));
    }

    #[test]
    fn zero_payment_leaves_member_unpaid() {
        let mut m = member();
        let outcome = m.record_payment(Money::ZERO).unwrap();
        assert_eq!(outcome.remaining(), rupees(50_000));
        assert_eq!(m.payment_status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn negative_payment_is_an_input_fault() {
        let mut m = member();
        let err = m.record_payment(rupees(-1)).unwrap_err();
        assert!(!err.is_business_outcome());
        assert_eq!(m.paid_amount(), Money::ZERO);
    }

    // Discount tests

    #[test]
    fn discount_before_completion_is_not_eligible() {
        let mut m = member();
        m.record_payment(rupees(49_999)).unwrap();
        assert_eq!(
            m.compute_discount(),
            Err(MembershipError::DiscountNotEligible)
        );
        assert_eq!(m.discount_amount(), Money::ZERO);
    }

    #[test]
    fn discount_after_completion_is_ten_percent() {
        let mut m = member();
        m.record_payment(rupees(50_000)).unwrap();
        let outcome = m.compute_discount().unwrap();
        assert_eq!(outcome.amount, rupees(5_000));
        assert_eq!(m.discount_amount(), rupees(5_000));

        // recomputing yields the same value
        assert_eq!(m.compute_discount().unwrap().amount, rupees(5_000));
    }

    // Revert tests

    #[test]
    fn revert_clears_payment_discount_and_trainer() {
        let mut m = member();
        m.activate();
        m.mark_attendance();
        m.record_payment(rupees(50_000)).unwrap();
        m.compute_discount().unwrap();

        let outcome = m.revert();

        assert_eq!(outcome.kind, MemberKind::Prepaid);
        assert_eq!(m.personal_trainer(), "");
        assert_eq!(m.paid_amount(), Money::ZERO);
        assert!(!m.is_payment_complete());
        assert_eq!(m.discount_amount(), Money::ZERO);
        assert_eq!(m.activity().attendance(), 0);
        assert_eq!(m.activity().loyalty_points(), 0);
        assert!(!m.activity().is_active());
        assert_eq!(m.profile(), &profile());
        assert_eq!(m.id(), MemberId::new(2));
    }

    #[test]
    fn reverted_member_can_pay_again() {
        let mut m = member();
        m.record_payment(rupees(50_000)).unwrap();
        m.revert();
        assert!(m.record_payment(rupees(10_000)).is_ok());
        assert_eq!(m.paid_amount(), rupees(10_000));
    }

    proptest! {
        #[test]
        fn paid_amount_never_exceeds_charge(payments in proptest::collection::vec(0i64..30_000, 0..12)) {
            let mut m = member();
            for rupee_amount in payments {
                let before = m.paid_amount();
                match m.record_payment(rupees(rupee_amount)) {
                    Ok(_) => {
                        prop_assert_eq!(m.paid_amount(), before + rupees(rupee_amount));
                    }
                    Err(_) => {
                        prop_assert_eq!(m.paid_amount(), before);
                    }
                }
                prop_assert!(m.paid_amount() <= rupees(50_000));
                prop_assert_eq!(m.is_payment_complete(), m.paid_amount() == rupees(50_000));
            }
        }

        #[test]
        fn oversized_payment_leaves_balance_untouched(
            first in 0i64..=50_000,
            paise in 5_000_001i64..=i64::MAX,
        ) {
            let mut m = member();
            let _ = m.record_payment(rupees(first));
            let before = m.paid_amount();
            let status = m.payment_status();

            let result = m.record_payment(Money::from_paise(paise));

            let rejected = matches!(
                result,
                Err(MembershipError::PaymentOverflow { .. }) | Err(MembershipError::AlreadyPaidInFull)
            );
            prop_assert!(rejected);
            prop_assert_eq!(m.paid_amount(), before);
            prop_assert_eq!(m.payment_status(), status);
        }
    }
}
