use crate::explorer::ExplorerError;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}

pub type Result<T> = std::result::Result<T, ScanError>;
