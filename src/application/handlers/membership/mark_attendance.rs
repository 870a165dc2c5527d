//! MarkAttendanceHandler - Command handler for recording gym visits.

use tracing::{debug, info};

use crate::application::SharedDirectory;
use crate::domain::foundation::MemberId;
use crate::domain::membership::{Member, MembershipError};

/// Command to record one visit.
#[derive(Debug, Clone)]
pub struct MarkAttendanceCommand {
    pub member_id: MemberId,
}

/// Counters after the visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceResult {
    pub member_id: MemberId,
    pub attendance: u32,
    pub loyalty_points: u32,
    /// Upgrade eligibility, for regular members only.
    pub upgrade_eligible: Option<bool>,
}

/// Handler for marking attendance.
///
/// Only active members can check in. Regular members stop at the
/// attendance limit; premium members have no ceiling.
pub struct MarkAttendanceHandler {
    directory: SharedDirectory,
}

impl MarkAttendanceHandler {
    pub fn new(directory: SharedDirectory) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        cmd: MarkAttendanceCommand,
    ) -> Result<MarkAttendanceResult, MembershipError> {
        let mut directory = self.directory.write().await;
        let member = directory.lookup_mut(cmd.member_id)?;

        if let Err(e) = Self::check_can_visit(member) {
            debug!(member_id = %cmd.member_id, error = %e, "Attendance rejected");
            return Err(e);
        }

        member.mark_attendance();

        let result = MarkAttendanceResult {
            member_id: cmd.member_id,
            attendance: member.activity().attendance(),
            loyalty_points: member.activity().loyalty_points(),
            upgrade_eligible: member.as_metered().map(|m| m.is_upgrade_eligible()),
        };
        info!(
            member_id = %cmd.member_id,
            attendance = result.attendance,
            loyalty_points = result.loyalty_points,
            "Attendance marked"
        );
        Ok(result)
    }

    fn check_can_visit(member: &Member) -> Result<(), MembershipError> {
        if !member.is_active() {
            return Err(MembershipError::member_inactive(member.id()));
        }
        if let Some(regular) = member.as_metered() {
            if regular.activity().attendance() >= regular.attendance_limit() {
                return Err(MembershipError::attendance_limit_reached(regular.attendance_limit()));
            }
        }
        Ok(())
    }
}
