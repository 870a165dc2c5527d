//! Metered-plan ("regular") member.
//!
//! Regular members climb a three-tier plan ladder. Switching tiers is gated
//! by an attendance threshold: once a member has visited
//! [`ATTENDANCE_LIMIT`] times they become upgrade eligible, and stay so
//! until reverted.
//!
//! # Design Decisions
//!
//! - **Latch survives upgrades**: a successful upgrade does not consume
//!   eligibility, so an eligible member may change tiers repeatedly
//! - **Price is cached**: `price` always equals `plan.price()`; both change
//!   together

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Money};

use super::{
    MemberActivity, MemberKind, MemberProfile, MembershipError, PlanTier, RevertOutcome,
    UpgradeOutcome,
};

/// Visits required before a regular member may change plans.
pub const ATTENDANCE_LIMIT: u32 = 30;

/// Loyalty points awarded per regular visit.
pub const REGULAR_VISIT_POINTS: u32 = 5;

/// Regular member on the basic/standard/deluxe ladder.
///
/// # Invariants
///
/// - `upgrade_eligible` is true iff attendance reached `ATTENDANCE_LIMIT`
///   since the last revert
/// - `price == plan.price()`
/// - `referral_source` never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteredPlanMember {
    id: MemberId,
    profile: MemberProfile,
    activity: MemberActivity,
    plan: PlanTier,
    price: Money,
    upgrade_eligible: bool,
    referral_source: String,
    removal_reason: String,
}

impl MeteredPlanMember {
    /// Enrolls a new regular member on the basic plan, inactive.
    pub fn new(id: MemberId, profile: MemberProfile, referral_source: impl Into<String>) -> Self {
        Self {
            id,
            profile,
            activity: MemberActivity::new(),
            plan: PlanTier::Basic,
            price: PlanTier::Basic.price(),
            upgrade_eligible: false,
            referral_source: referral_source.into(),
            removal_reason: String::new(),
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

    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn attendance_limit(&self) -> u32 {
        ATTENDANCE_LIMIT
    }

    pub fn is_upgrade_eligible(&self) -> bool {
        self.upgrade_eligible
    }

    pub fn referral_source(&self) -> &str {
        &self.referral_source
    }

    /// Empty until the member has been reverted.
    pub fn removal_reason(&self) -> &str {
        &self.removal_reason
    }

    pub fn activate(&mut self) {
        self.activity.activate();
    }

    pub fn deactivate(&mut self) {
        self.activity.deactivate();
    }

    /// Records a visit: +1 attendance, +5 points, and latches upgrade
    /// eligibility once the attendance limit is reached.
    ///
    /// Does not check that the member is active; callers do.
    pub fn mark_attendance(&mut self) {
        self.activity.record_visit(REGULAR_VISIT_POINTS);
        if self.activity.attendance() >= ATTENDANCE_LIMIT {
            self.upgrade_eligible = true;
        }
    }

    /// Price of a tier by name, or `None` for an unknown tier.
    pub fn plan_price_of(tier: &str) -> Option<Money> {
        PlanTier::from_name(tier).map(|tier| tier.price())
    }

    /// Moves the member to `requested` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Checked in this order, none of which change state:
    /// - `AlreadyOnPlan` if `requested` names the current tier
    /// - `NotEligible` if the attendance threshold has not been met
    /// - `InvalidPlan` if `requested` is not a known tier
    pub fn upgrade_plan(&mut self, requested: &str) -> Result<UpgradeOutcome, MembershipError> {
        if requested.trim().eq_ignore_ascii_case(self.plan.name()) {
            return Err(MembershipError::already_on_plan(self.plan));
        }

        if !self.upgrade_eligible {
            return Err(MembershipError::not_eligible(ATTENDANCE_LIMIT));
        }

        let tier: PlanTier = requested.parse()?;
        self.plan = tier;
        self.price = tier.price();

        Ok(UpgradeOutcome {
            tier,
            price: self.price,
        })
    }

    /// Resets activity, eligibility and plan to the enrollment baseline and
    /// records why. Identity, profile and referral source are kept.
    ///
    /// The reason is stored as given; requiring it to be non-empty is the
    /// caller's job.
    pub fn revert(&mut self, removal_reason: impl Into<String>) -> RevertOutcome {
        self.activity.reset();
        self.upgrade_eligible = false;
        self.plan = PlanTier::Basic;
        self.price = PlanTier::Basic.price();
        self.removal_reason = removal_reason.into();

        RevertOutcome {
            kind: MemberKind::MeteredPlan,
            reason: Some(self.removal_reason.clone()),
        }
    }
}
