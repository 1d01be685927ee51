use serde::{Deserialize, Serialize};
use std::fmt;

use super::TransferRecord;

/// Which heuristic raised a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// Sender looks like the zero address, or sent to itself.
    NullOrSelfOrigin,
    /// Token name advertises an airdrop or a claim.
    KeywordInName,
    /// Token name or symbol is longer than any legitimate listing uses.
    OversizedIdentifier,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::NullOrSelfOrigin => "airdrop from a null/self address",
            Reason::KeywordInName => "name contains 'airdrop' or 'claim'",
            Reason::OversizedIdentifier => "token name or symbol too long",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token identity that tripped one heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspicionFlag {
    pub token_name: String,
    pub token_symbol: String,
    pub contract_address: String,
    pub reason: Reason,
}

impl SuspicionFlag {
    pub fn new(record: &TransferRecord, reason: Reason) -> Self {
        Self {
            token_name: record.token_name.clone(),
            token_symbol: record.token_symbol.clone(),
            contract_address: record.contract_address.clone(),
            reason,
        }
    }
}

impl fmt::Display for SuspicionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | {} → {}",
            self.token_name, self.token_symbol, self.contract_address, self.reason
        )
    }
}
