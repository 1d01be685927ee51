pub mod config;
pub mod errors;
pub mod explorer;
pub mod intelligence;
pub mod models;
pub mod report;

use crate::explorer::ExplorerClient;
use crate::intelligence::detect_scam_tokens;
use crate::models::SuspicionFlag;

/// Fetch a wallet's token transfers and flag the suspicious tokens.
///
/// Returns the number of transfers fetched alongside the flags.
pub async fn scan_wallet(
    client: &ExplorerClient,
    address: &str,
    api_key: &str,
) -> errors::Result<(usize, Vec<SuspicionFlag>)> {
    scan_wallet_with_progress(client, address, api_key, |_| {}).await
}

/// Like [`scan_wallet`], but calls `on_fetched` with the transfer count
/// once the fetch is done and before classification starts.
pub async fn scan_wallet_with_progress(
    client: &ExplorerClient,
    address: &str,
    api_key: &str,
    on_fetched: impl FnOnce(usize),
) -> errors::Result<(usize, Vec<SuspicionFlag>)> {
    let transfers = client.get_token_transfers(address, api_key).await?;
    on_fetched(transfers.len());

    let flags = detect_scam_tokens(&transfers);
    Ok((transfers.len(), flags))
}
