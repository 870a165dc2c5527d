//! EnrollMemberHandler - Command handler for enrolling new members.

use tracing::{debug, info};

use crate::application::SharedDirectory;
use crate::domain::enrollment::{EnrollmentForm, EnrollmentPlan};
use crate::domain::membership::{Member, MembershipError};

/// Command to enroll a member from raw form input.
#[derive(Debug, Clone)]
pub struct EnrollMemberCommand {
    pub form: EnrollmentForm,
    pub plan: EnrollmentPlan,
}

/// Result of successful enrollment.
#[derive(Debug, Clone)]
pub struct EnrollMemberResult {
    pub member: Member,
}

/// Handler for enrolling members.
///
/// New members start inactive with zero attendance. Regular members start
/// on the basic plan.
pub struct EnrollMemberHandler {
    directory: SharedDirectory,
}

impl EnrollMemberHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: EnrollMemberCommand,
    ) -> Result<EnrollMemberResult, MembershipError> {
        // 1. Validate input and build the member
        let member = cmd.form.into_member(&cmd.plan).map_err(|e| {
            debug!(field = e.field(), error = %e, "Enrollment rejected");
            MembershipError::from(e)
        })?;

        // 2. Insert, rejecting a taken id
        let mut directory = self.directory.write().await;
        let member = directory
            .insert(member)
            .map_err(|e| {
                debug!(error = %e, "Enrollment rejected");
                e
            })?
            .clone();

        info!(member_id = %member.id(), kind = %member.kind(), "Member enrolled");
        Ok(EnrollMemberResult { member })
    }
}
