//! Plan tier definitions for metered-plan members.
//!
//! The plan ladder has three rungs with fixed monthly prices.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::Money;

use super::MembershipError;

/// Metered plan tier.
///
/// New members start on `Basic`. Moving to another tier requires upgrade
/// eligibility (see `MeteredPlanMember::upgrade_plan`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Entry plan, Rs. 6500.
    #[default]
    Basic,

    /// Rs. 12500.
    Standard,

    /// Top plan, Rs. 18500.
    Deluxe,
}

impl PlanTier {
    /// All tiers, cheapest first.
    pub const ALL: [PlanTier; 3] = [PlanTier::Basic, PlanTier::Standard, PlanTier::Deluxe];

    /// Returns the fixed price of this tier.
    pub fn price(&self) -> Money {
        match self {
            PlanTier::Basic => Money::from_rupees(6_500),
            PlanTier::Standard => Money::from_rupees(12_500),
            PlanTier::Deluxe => Money::from_rupees(18_500),
        }
    }

    /// Lowercase name as shown to members and written to the details file.
    pub fn name(&self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::Standard => "standard",
            PlanTier::Deluxe => "deluxe",
        }
    }

    /// Case-insensitive lookup by name. Returns `None` for unknown tiers.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PlanTier {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MembershipError::invalid_plan(s))
    }
}
