use std::collections::HashSet;

use crate::models::{Reason, SuspicionFlag, TransferRecord};

/// Sender prefix shared by the zero address and its vanity look-alikes.
const NULL_ADDRESS_PREFIX: &str = "0x000";

/// Substrings phishing tokens put in their name to lure a claim.
const SCAM_KEYWORDS: [&str; 2] = ["airdrop", "claim"];

const MAX_NAME_CHARS: usize = 25;
const MAX_SYMBOL_CHARS: usize = 10;

/// Flag suspicious tokens in a wallet's transfer history.
///
/// Each distinct (name, symbol, contract) is evaluated once, on its first
/// occurrence in `transfers`. The three heuristics run independently, so a
/// single token can contribute up to three flags, in this order:
/// - **NullOrSelfOrigin**: sender starts with `0x000`, or sender == recipient.
/// - **KeywordInName**: name contains `airdrop` or `claim`.
/// - **OversizedIdentifier**: name > 25 chars or symbol > 10 chars.
pub fn detect_scam_tokens(transfers: &[TransferRecord]) -> Vec<SuspicionFlag> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut flags = Vec::new();

    for tx in transfers {
        if !seen.insert(tx.dedup_key()) {
            continue;
        }

        if is_null_or_self_origin(tx) {
            flags.push(SuspicionFlag::new(tx, Reason::NullOrSelfOrigin));
        }

        if has_scam_keyword(&tx.token_name) {
            flags.push(SuspicionFlag::new(tx, Reason::KeywordInName));
        }

        if has_oversized_identifier(&tx.token_name, &tx.token_symbol) {
            flags.push(SuspicionFlag::new(tx, Reason::OversizedIdentifier));
        }
    }

    tracing::debug!(
        transfers = transfers.len(),
        unique_tokens = seen.len(),
        flags = flags.len(),
        "Classification pass complete"
    );

    flags
}

/// Only the sender is prefix-checked; the recipient matters only for the
/// self-transfer comparison.
pub fn is_null_or_self_origin(tx: &TransferRecord) -> bool {
    let from = tx.from.to_lowercase();
    from.starts_with(NULL_ADDRESS_PREFIX) || from == tx.to.to_lowercase()
}

pub fn has_scam_keyword(token_name: &str) -> bool {
    let name = token_name.to_lowercase();
    SCAM_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// Lengths are in characters, not bytes.
pub fn has_oversized_identifier(token_name: &str, token_symbol: &str) -> bool {
    token_name.chars().count() > MAX_NAME_CHARS || token_symbol.chars().count() > MAX_SYMBOL_CHARS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
