//! GetMemberHandler - Query handler for a single member.

use serde::Serialize;

use crate::application::SharedDirectory;
use crate::domain::foundation::{MemberId, Money};
use crate::domain::membership::{
    Member, MemberKind, MemberProfile, MembershipError, PaymentStatus, PlanTier,
};

/// Read-only view of a member for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberView {
    pub id: MemberId,
    pub kind: MemberKind,
    pub profile: MemberProfile,
    pub active: bool,
    pub attendance: u32,
    pub loyalty_points: u32,
    pub details: MemberDetailsView,
}

/// Variant-specific part of a [`MemberView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberDetailsView {
    MeteredPlan {
        plan: PlanTier,
        price: Money,
        attendance_limit: u32,
        upgrade_eligible: bool,
        referral_source: String,
        removal_reason: String,
    },
    Prepaid {
        personal_trainer: String,
        fixed_charge: Money,
        paid_amount: Money,
        remaining_amount: Money,
        payment_status: PaymentStatus,
        discount_amount: Money,
    },
}

impl From<&Member> for MemberView {
    fn from(member: &Member) -> Self {
        let details = match member {
            Member::MeteredPlan(m) => MemberDetailsView::MeteredPlan {
                plan: m.plan(),
                price: m.price(),
                attendance_limit: m.attendance_limit(),
                upgrade_eligible: m.is_upgrade_eligible(),
                referral_source: m.referral_source().to_string(),
                removal_reason: m.removal_reason().to_string(),
            },
            Member::Prepaid(m) => MemberDetailsView::Prepaid {
                personal_trainer: m.personal_trainer().to_string(),
                fixed_charge: m.fixed_charge(),
                paid_amount: m.paid_amount(),
                remaining_amount: m.remaining_amount(),
                payment_status: m.payment_status(),
                discount_amount: m.discount_amount(),
            },
        };

        Self {
            id: member.id(),
            kind: member.kind(),
            profile: member.profile().clone(),
            active: member.is_active(),
            attendance: member.activity().attendance(),
            loyalty_points: member.activity().loyalty_points(),
            details,
        }
    }
}

/// Query for one member by id.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub member_id: MemberId,
}

pub type GetMemberResult = MemberView;

/// Handler for retrieving a member.
pub struct GetMemberHandler {
    directory: SharedDirectory,
}

impl GetMemberHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: GetMemberQuery) -> Result<GetMemberResult, MembershipError> {
        let directory = self.directory.read().await;
        directory.lookup(query.member_id).map(MemberView::from)
    }
}
