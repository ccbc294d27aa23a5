//! Portfolio project service integration.

pub mod client;
pub mod types;

pub use client::PortfolioClient;
pub use types::*;
