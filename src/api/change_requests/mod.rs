//! Change request service integration.

pub mod client;
pub mod types;

pub use client::ChangeRequestClient;
pub use types::*;
