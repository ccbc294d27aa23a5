//! Governance task service integration.

pub mod client;
pub mod types;

pub use client::TaskClient;
pub use types::*;
