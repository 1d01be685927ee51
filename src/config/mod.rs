use std::env;
use std::str::FromStr;

use crate::errors::ScanError;
use crate::explorer::ETHERSCAN_API_BASE;

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ScanError::Config(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Etherscan-compatible account API endpoint.
    pub explorer_api_url: String,
    pub log_format: LogFormat,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            explorer_api_url: ETHERSCAN_API_BASE.into(),
            log_format: LogFormat::Text,
        }
    }
}

impl ScannerConfig {
    pub fn from_env() -> Result<Self, ScanError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScanError> {
        let explorer_api_url = lookup("EXPLORER_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ETHERSCAN_API_BASE.into());

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Text,
        };

        Ok(Self {
            explorer_api_url,
            log_format,
        })
    }
}
