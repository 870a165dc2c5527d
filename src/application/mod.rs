//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//!
//! Every handler shares one [`MemberDirectory`] behind a [`SharedDirectory`].
//! Commands hold the write lock from member lookup through the last
//! mutation, so check-then-act sequences such as "verify the attendance
//! ceiling, then record the visit" never interleave.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::membership::MemberDirectory;

pub mod handlers;

/// The member directory shared by all handlers.
pub type SharedDirectory = Arc<RwLock<MemberDirectory>>;

/// Wraps `directory` for sharing between handlers.
pub fn shared_directory(directory: MemberDirectory) -> SharedDirectory {
    Arc::new(RwLock::new(directory))
}

pub use handlers::membership::*;
