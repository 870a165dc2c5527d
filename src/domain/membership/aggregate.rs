//! Member aggregate.
//!
//! A gym member is exactly one of two variants. Shared behaviour
//! (activation, attendance, profile access) is dispatched here by `match`;
//! variant-specific operations are reached through [`Member::as_metered_mut`]
//! and [`Member::as_prepaid_mut`], which fail with `WrongVariant` instead of
//! requiring the caller to inspect the type.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberId;

use super::{MemberActivity, MemberProfile, MembershipError, MeteredPlanMember, PrepaidMember};

/// Which membership variant a member holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// Tiered plan gated by attendance ("regular").
    MeteredPlan,

    /// Fixed one-time charge ("premium").
    Prepaid,
}

impl MemberKind {
    /// Label used in reports and the member details file.
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::MeteredPlan => "Regular",
            MemberKind::Prepaid => "Premium",
        }
    }

    /// Lowercase noun used in operator messages.
    pub fn noun(&self) -> &'static str {
        match self {
            MemberKind::MeteredPlan => "regular",
            MemberKind::Prepaid => "premium",
        }
    }

    /// Parses a report label (`Regular` / `Premium`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Regular" => Some(MemberKind::MeteredPlan),
            "Premium" => Some(MemberKind::Prepaid),
            _ => None,
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A gym member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    MeteredPlan(MeteredPlanMember),
    Prepaid(PrepaidMember),
}

impl Member {
    pub fn id(&self) -> MemberId {
        match self {
            Member::MeteredPlan(m) => m.id(),
            Member::Prepaid(m) => m.id(),
        }
    }

    pub fn kind(&self) -> MemberKind {
        match self {
            Member::MeteredPlan(_) => MemberKind::MeteredPlan,
            Member::Prepaid(_) => MemberKind::Prepaid,
        }
    }

    pub fn profile(&self) -> &MemberProfile {
        match self {
            Member::MeteredPlan(m) => m.profile(),
            Member::Prepaid(m) => m.profile(),
        }
    }

    pub fn activity(&self) -> &MemberActivity {
        match self {
            Member::MeteredPlan(m) => m.activity(),
            Member::Prepaid(m) => m.activity(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.activity().is_active()
    }

    pub fn activate(&mut self) {
        match self {
            Member::MeteredPlan(m) => m.activate(),
            Member::Prepaid(m) => m.activate(),
        }
    }

    pub fn deactivate(&mut self) {
        match self {
            Member::MeteredPlan(m) => m.deactivate(),
            Member::Prepaid(m) => m.deactivate(),
        }
    }

    /// Records a visit with the variant's point award.
    ///
    /// Activity status and the regular visit ceiling are the caller's to
    /// check.
    pub fn mark_attendance(&mut self) {
        match self {
            Member::MeteredPlan(m) => m.mark_attendance(),
            Member::Prepaid(m) => m.mark_attendance(),
        }
    }

    pub fn as_metered(&self) -> Option<&MeteredPlanMember> {
        match self {
            Member::MeteredPlan(m) => Some(m),
            Member::Prepaid(_) => None,
        }
    }

    pub fn as_prepaid(&self) -> Option<&PrepaidMember> {
        match self {
            Member::Prepaid(m) => Some(m),
            Member::MeteredPlan(_) => None,
        }
    }

    /// Regular-only access for `operation`.
    ///
    /// # Errors
    ///
    /// `WrongVariant` if this is a premium member.
    pub fn as_metered_mut(
        &mut self,
        operation: &str,
    ) -> Result<&mut MeteredPlanMember, MembershipError> {
        match self {
            Member::MeteredPlan(m) => Ok(m),
            Member::Prepaid(m) => Err(MembershipError::wrong_variant(
                m.id(),
                MemberKind::MeteredPlan,
                operation,
            )),
        }
    }

    /// Premium-only access for `operation`.
    ///
    /// # Errors
    ///
    /// `WrongVariant` if this is a regular member.
    pub fn as_prepaid_mut(&mut self, operation: &str) -> Result<&mut PrepaidMember, MembershipError> {
        match self {
            Member::Prepaid(m) => Ok(m),
            Member::MeteredPlan(m) => Err(MembershipError::wrong_variant(
                m.id(),
                MemberKind::Prepaid,
                operation,
            )),
        }
    }
}

impl From<MeteredPlanMember> for Member {
    fn from(member: MeteredPlanMember) -> Self {
        Member::MeteredPlan(member)
    }
}

impl From<PrepaidMember> for Member {
    fn from(member: PrepaidMember) -> Self {
        Member::Prepaid(member)
    }
}
