//! Data shared by every membership variant.
//!
//! `MemberProfile` is who the member is; `MemberActivity` is what they have
//! done. Profile fields are opaque strings here: their syntax is checked by
//! the enrollment validator before a member is ever built.

use serde::{Deserialize, Serialize};

/// Personal details captured at enrollment. Never changed by membership
/// operations, including revert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub location: String,
    /// Ten digit contact number.
    pub phone: String,
    pub email: String,
    pub gender: String,
    /// `YYYY/MM/DD`
    pub date_of_birth: String,
    /// `YYYY/MM/DD`
    pub membership_start_date: String,
}

/// Attendance and activation counters.
///
/// # Invariants
///
/// - `attendance` and `loyalty_points` only grow, except through `reset`
/// - `active` only changes through `activate`, `deactivate` or `reset`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberActivity {
    attendance: u32,
    loyalty_points: u32,
    active: bool,
}

impl MemberActivity {
    /// Fresh counters: no visits, no points, inactive.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attendance(&self) -> u32 {
        self.attendance
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn activate(&mut self) {
        self.active = true;
    }

    pub(super) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Counts one visit and awards `points`.
    pub(super) fn record_visit(&mut self, points: u32) {
        self.attendance = self.attendance.saturating_add(1);
        self.loyalty_points = self.loyalty_points.saturating_add(points);
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
