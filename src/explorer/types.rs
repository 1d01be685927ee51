use serde::{Deserialize, Deserializer};

use crate::models::TransferRecord;

/// Any non-string JSON value (number, bool, object, null) reads as `""`.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Top-level explorer response. `result` is an array on success and a bare
/// string (e.g. "Invalid API Key") on failure, so it is kept untyped here.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub message: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Token transfer (account / tokentx)
// ---------------------------------------------------------------------------

/// The fields of a `tokentx` entry the scanner reads. Everything else the
/// explorer sends (block, hash, value, decimals...) is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenTransfer {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub token_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub token_symbol: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub contract_address: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub from: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub to: String,
}

impl From<ApiTokenTransfer> for TransferRecord {
    fn from(tx: ApiTokenTransfer) -> Self {
        Self {
            token_name: tx.token_name,
            token_symbol: tx.token_symbol,
            contract_address: tx.contract_address,
            from: tx.from,
            to: tx.to,
        }
    }
}
