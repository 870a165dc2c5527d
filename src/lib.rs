//! Gym Tracker - Membership tracking for a gym front desk
//!
//! Keeps an in-memory directory of regular (metered plan) and premium
//! (prepaid) members, enforces their attendance, upgrade and payment rules,
//! and writes a member details report to disk.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
