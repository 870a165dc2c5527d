//! Membership handlers.
//!
//! Command and query handlers for the member lifecycle:
//!
//! ## Commands
//! - Enrolling regular and premium members
//! - Activating and deactivating memberships
//! - Marking attendance
//! - Upgrading regular plans
//! - Premium payments and the completion discount
//! - Reverting members to a fresh baseline
//! - Saving the member details report
//!
//! ## Queries
//! - Get one member, list members
//! - Load the member details report

mod activate_membership;
mod calculate_discount;
mod deactivate_membership;
mod enroll_member;
mod get_member;
mod list_members;
mod load_member_details;
mod mark_attendance;
mod pay_due_amount;
mod revert_member;
mod save_member_details;
mod upgrade_plan;

#[cfg(test)]
pub(crate) mod test_support;

// Commands
pub use activate_membership::{
    ActivateMembershipCommand, ActivateMembershipHandler, ActivateMembershipResult,
};
pub use calculate_discount::{
    CalculateDiscountCommand, CalculateDiscountHandler, CalculateDiscountResult,
};
pub use deactivate_membership::{
    DeactivateMembershipCommand, DeactivateMembershipHandler, DeactivateMembershipResult,
};
pub use enroll_member::{EnrollMemberCommand, EnrollMemberHandler, EnrollMemberResult};
pub use mark_attendance::{MarkAttendanceCommand, MarkAttendanceHandler, MarkAttendanceResult};
pub use pay_due_amount::{PayDueAmountCommand, PayDueAmountHandler, PayDueAmountResult};
pub use revert_member::{RevertMemberCommand, RevertMemberHandler, RevertMemberResult, RevertTarget};
pub use save_member_details::{
    SaveMemberDetailsCommand, SaveMemberDetailsHandler, SaveMemberDetailsResult,
};
pub use upgrade_plan::{UpgradePlanCommand, UpgradePlanHandler, UpgradePlanResult};

// Queries
pub use get_member::{GetMemberHandler, GetMemberQuery, GetMemberResult, MemberDetailsView, MemberView};
pub use list_members::{ListMembersHandler, ListMembersQuery, ListMembersResult};
pub use load_member_details::{LoadMemberDetailsHandler, LoadMemberDetailsQuery, MemberDetailsReport};
