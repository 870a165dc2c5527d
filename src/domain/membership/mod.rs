//! Membership domain module.
//!
//! Handles the member lifecycle: activation, attendance, plan upgrades,
//! payment settlement, discounts, and reverts.
//!
//! # Module Structure
//!
//! - `aggregate` - Member sum type over the two variants
//! - `profile` - Profile and activity records shared by both variants
//! - `metered` - Regular members on the basic/standard/deluxe ladder
//! - `prepaid` - Premium members settling a fixed charge
//! - `tier` - PlanTier price table
//! - `status` - PaymentStatus state machine
//! - `outcomes` - Success results of member operations
//! - `directory` - Id-keyed member arena
//! - `errors` - MembershipError taxonomy

mod aggregate;
mod directory;
mod errors;
mod metered;
mod outcomes;
mod prepaid;
mod profile;
mod status;
mod tier;

pub use aggregate::{Member, MemberKind};
pub use directory::MemberDirectory;
pub use errors::MembershipError;
pub use metered::{MeteredPlanMember, ATTENDANCE_LIMIT, REGULAR_VISIT_POINTS};
pub use outcomes::{DiscountOutcome, PaymentOutcome, RevertOutcome, UpgradeOutcome};
pub use prepaid::{PrepaidMember, DISCOUNT_PERCENT, PREMIUM_CHARGE, PREMIUM_VISIT_POINTS};
pub use profile::{MemberActivity, MemberProfile};
pub use status::PaymentStatus;
pub use tier::PlanTier;
