use reqwest::Client;
use thiserror::Error;

use super::types::{ApiEnvelope, ApiTokenTransfer};
use crate::models::TransferRecord;

pub const ETHERSCAN_API_BASE: &str = "https://api.etherscan.io/api";

/// Highest block the explorer accepts as `endblock`; covers the whole chain.
const END_BLOCK: &str = "99999999";

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("malformed explorer response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// The request URL carries the API key, so it is stripped before the error
/// can reach a log line or the terminal.
impl From<reqwest::Error> for ExplorerError {
    fn from(e: reqwest::Error) -> Self {
        ExplorerError::Http(e.without_url())
    }
}

/// Client for an Etherscan-compatible account API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: Client,
    base_url: String,
}

impl ExplorerClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, ETHERSCAN_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every ERC-20 transfer touching `address`, newest first.
    ///
    /// An explorer reply without a usable `result` array yields an empty
    /// list rather than an error. The HTTP status only matters when the body
    /// is not an explorer envelope: a 429 carrying a valid envelope is read
    /// like a 200.
    pub async fn get_token_transfers(
        &self,
        address: &str,
        api_key: &str,
    ) -> Result<Vec<TransferRecord>, ExplorerError> {
        tracing::debug!(address = %address, url = %self.base_url, "Requesting token transfers");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("module", "account"),
                ("action", "tokentx"),
                ("address", address),
                ("startblock", "0"),
                ("endblock", END_BLOCK),
                ("sort", "desc"),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        let envelope = match parse_envelope(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                return Err(match status_error {
                    Some(status_error) => status_error.into(),
                    None => e,
                })
            }
        };

        if status_error.is_some() {
            tracing::warn!(
                status = %status,
                "Explorer answered with an error status; reading its body anyway"
            );
        }

        let records = transfers_from_envelope(envelope);

        tracing::info!(address = %address, count = records.len(), "Token transfers fetched");
        Ok(records)
    }
}

/// Decode a response body, which must be a JSON object.
pub fn parse_envelope(body: &str) -> Result<ApiEnvelope, ExplorerError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ExplorerError::Unexpected(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Pull transfer records out of an explorer reply.
pub fn transfers_from_envelope(envelope: ApiEnvelope) -> Vec<TransferRecord> {
    let items = match envelope.result {
        Some(serde_json::Value::Array(items)) => items,
        Some(serde_json::Value::Null) | None => return Vec::new(),
        Some(other) => {
            tracing::warn!(
                status = %envelope.status,
                message = %envelope.message,
                result = %other,
                "Explorer returned no transfer list"
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                tracing::warn!(entry = %item, "Skipping non-object transfer entry");
                return None;
            }
            match serde_json::from_value::<ApiTokenTransfer>(item) {
                Ok(tx) => Some(TransferRecord::from(tx)),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed transfer entry");
                    None
                }
            }
        })
        .collect()
}
