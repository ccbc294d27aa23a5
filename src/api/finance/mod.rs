//! Finance project service integration.
//!
//! Finance projects carry an ordered payment-term sub-collection under
//! the legacy wire name `terminPembayaran`, plus file attachments.

pub mod client;
pub mod types;

pub use client::FinanceClient;
pub use types::*;
