//! Audit service integration.
//!
//! This module provides:
//! - API types for audit engagements
//! - Client for the audit backend service

pub mod client;
pub mod types;

pub use client::AuditClient;
pub use types::*;
