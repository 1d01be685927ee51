pub mod client;
pub mod types;

pub use client::{ExplorerClient, ExplorerError, ETHERSCAN_API_BASE};
pub use types::{ApiEnvelope, ApiTokenTransfer};
