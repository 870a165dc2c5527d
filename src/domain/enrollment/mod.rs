//! Enrollment input validation.
//!
//! Everything the membership domain trusts about profile fields is checked
//! here, before a member is built: ten digit phone numbers, email shape,
//! `YYYY/MM/DD` dates between 1900 and 2025, and a minimum age of ten on
//! the membership start date.

mod form;
pub mod rules;

pub use form::{EnrollmentForm, EnrollmentPlan};
