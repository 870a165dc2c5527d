//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, money, errors, state machines)
//! - `membership` - Member variants, their lifecycle rules, and the directory
//! - `enrollment` - Validation of raw enrollment input

pub mod enrollment;
pub mod foundation;
pub mod membership;
