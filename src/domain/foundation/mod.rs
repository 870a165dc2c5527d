//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the gym membership domain.

mod errors;
mod ids;
mod money;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::MemberId;
pub use money::Money;
pub use state_machine::StateMachine;
