//! Membership-specific error types.
//!
//! Almost every variant is an expected business outcome that the front desk
//! shows to the operator verbatim via [`MembershipError::message`]. Two
//! variants are faults instead: `InvalidInput` (a caller broke a contract,
//! e.g. a negative payment reached the domain), `InvalidStateTransition`
//! and `Infrastructure`.
//!
//! | Error | Kind |
//! |-------|------|
//! | NotFound | outcome |
//! | DuplicateIdentity | outcome |
//! | WrongVariant | outcome |
//! | MemberInactive | outcome |
//! | AttendanceLimitReached | outcome |
//! | NotEligible | outcome |
//! | InvalidPlan | outcome |
//! | AlreadyOnPlan | outcome |
//! | PaymentOverflow | outcome |
//! | AlreadyPaidInFull | outcome |
//! | DiscountNotEligible | outcome |
//! | ValidationFailed | outcome |
//! | InvalidInput | fault |
//! | InvalidStateTransition | fault |
//! | Infrastructure | fault |

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Money, ValidationError};

use super::{MemberKind, PlanTier};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No member with this id in the directory.
    NotFound(MemberId),

    /// A member with this id is already enrolled.
    DuplicateIdentity(MemberId),

    /// Operation belongs to the other membership variant.
    WrongVariant {
        id: MemberId,
        expected: MemberKind,
        operation: String,
    },

    /// Member must be active for this operation.
    MemberInactive {
        id: MemberId,
        operation: Option<String>,
    },

    /// Metered member has already used all counted visits.
    AttendanceLimitReached { limit: u32 },

    /// Upgrade requested before the attendance threshold was met.
    NotEligible { required_attendance: u32 },

    /// Upgrade requested to a tier that does not exist.
    InvalidPlan(String),

    /// Upgrade requested to the tier the member is already on.
    AlreadyOnPlan(PlanTier),

    /// Payment would push the paid total over the fixed charge.
    PaymentOverflow { charge: Money },

    /// Payment attempted after the charge was settled.
    AlreadyPaidInFull,

    /// Discount requested before the charge was settled.
    DiscountNotEligible,

    /// Input rejected before reaching the domain.
    ValidationFailed { field: String, message: String },

    /// Contract violation by the caller.
    InvalidInput { field: String, reason: String },

    /// A lifecycle state machine refused a move.
    InvalidStateTransition(String),

    /// Infrastructure error.
    Infrastructure(String),
}

impl MembershipError {
    pub fn not_found(id: MemberId) -> Self {
        MembershipError::NotFound(id)
    }

    pub fn duplicate_identity(id: MemberId) -> Self {
        MembershipError::DuplicateIdentity(id)
    }

    pub fn wrong_variant(id: MemberId, expected: MemberKind, operation: impl Into<String>) -> Self {
        MembershipError::WrongVariant {
            id,
            expected,
            operation: operation.into(),
        }
    }

    pub fn member_inactive(id: MemberId) -> Self {
        MembershipError::MemberInactive {
            id,
            operation: None,
        }
    }

    /// Inactive member attempting an operation that names itself in the message.
    pub fn member_inactive_for(id: MemberId, operation: impl Into<String>) -> Self {
        MembershipError::MemberInactive {
            id,
            operation: Some(operation.into()),
        }
    }

    pub fn attendance_limit_reached(limit: u32) -> Self {
        MembershipError::AttendanceLimitReached { limit }
    }

    pub fn not_eligible(required_attendance: u32) -> Self {
        MembershipError::NotEligible { required_attendance }
    }

    pub fn invalid_plan(requested: impl Into<String>) -> Self {
        MembershipError::InvalidPlan(requested.into())
    }

    pub fn already_on_plan(tier: PlanTier) -> Self {
        MembershipError::AlreadyOnPlan(tier)
    }

    pub fn payment_overflow(charge: Money) -> Self {
        MembershipError::PaymentOverflow { charge }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MembershipError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_state_transition(reason: impl Into<String>) -> Self {
        MembershipError::InvalidStateTransition(reason.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) => ErrorCode::MemberNotFound,
            MembershipError::DuplicateIdentity(_) => ErrorCode::DuplicateIdentity,
            MembershipError::WrongVariant { .. } => ErrorCode::WrongVariant,
            MembershipError::MemberInactive { .. } => ErrorCode::MemberInactive,
            MembershipError::AttendanceLimitReached { .. } => ErrorCode::AttendanceLimitReached,
            MembershipError::NotEligible { .. } => ErrorCode::NotEligible,
            MembershipError::InvalidPlan(_) => ErrorCode::InvalidPlan,
            MembershipError::AlreadyOnPlan(_) => ErrorCode::AlreadyOnPlan,
            MembershipError::PaymentOverflow { .. } => ErrorCode::PaymentOverflow,
            MembershipError::AlreadyPaidInFull => ErrorCode::AlreadyPaidInFull,
            MembershipError::DiscountNotEligible => ErrorCode::DiscountNotEligible,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::InvalidInput { .. } => ErrorCode::InvalidInput,
            MembershipError::InvalidStateTransition(_) => ErrorCode::InvalidStateTransition,
            MembershipError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns the message shown to the operator.
    pub fn message(&self) -> String {
        match self {
            MembershipError::NotFound(id) => format!("Member {} not found", id),
            MembershipError::DuplicateIdentity(id) => {
                format!("Member ID {} already exists", id)
            }
            MembershipError::WrongVariant {
                expected,
                operation,
                ..
            } => format!("Only {} members can {}", expected.noun(), operation),
            MembershipError::MemberInactive { operation, .. } => match operation {
                Some(operation) => format!("Member must be active to {}", operation),
                None => "Member is not active".to_string(),
            },
            MembershipError::AttendanceLimitReached { limit } => {
                format!("Attendance limit of {} visits reached", limit)
            }
            MembershipError::NotEligible { required_attendance } => format!(
                "Not eligible for upgrade. Required attendance: {}",
                required_attendance
            ),
            MembershipError::InvalidPlan(_) => {
                "Invalid plan. Available plans: basic, standard, deluxe".to_string()
            }
            MembershipError::AlreadyOnPlan(tier) => {
                format!("You are already subscribed to {} plan", tier)
            }
            MembershipError::PaymentOverflow { charge } => format!(
                "Invalid payment amount. Exceeds premium charge of {}",
                charge
            ),
            MembershipError::AlreadyPaidInFull => {
                "Payment already completed. No due amount.".to_string()
            }
            MembershipError::DiscountNotEligible => {
                "No discount available. Complete the payment to avail 10% discount.".to_string()
            }
            MembershipError::ValidationFailed { message, .. } => message.clone(),
            MembershipError::InvalidInput { field, reason } => {
                format!("Invalid input for '{}': {}", field, reason)
            }
            MembershipError::InvalidStateTransition(reason) => {
                format!("Invalid state transition: {}", reason)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true for expected business outcomes, false for faults.
    pub fn is_business_outcome(&self) -> bool {
        !matches!(
            self,
            MembershipError::InvalidInput { .. }
                | MembershipError::InvalidStateTransition(_)
                | MembershipError::Infrastructure(_)
        )
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        MembershipError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => MembershipError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

impl From<MembershipError> for DomainError {
    fn from(err: MembershipError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
