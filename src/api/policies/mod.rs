//! Policy service integration.

pub mod client;
pub mod types;

pub use client::PolicyClient;
pub use types::*;
