//! Memo service integration.

pub mod client;
pub mod types;

pub use client::MemoClient;
pub use types::*;
