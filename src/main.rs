use clap::Parser;

use airdrop_scanner::config::{LogFormat, ScannerConfig};
use airdrop_scanner::explorer::ExplorerClient;
use airdrop_scanner::report::{self, ScanReport};
use airdrop_scanner::scan_wallet_with_progress;

/// Look for suspicious airdrop tokens in a wallet.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ethereum wallet address
    #[arg(value_name = "ADDRESS")]
    address: String,

    /// Explorer (Etherscan) API key
    #[arg(value_name = "API_KEY")]
    api_key: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    let config = ScannerConfig::from_env()?;
    init_tracing(config.log_format);

    let client = ExplorerClient::with_base_url(reqwest::Client::new(), &config.explorer_api_url);

    println!("{}", report::FETCHING_LINE);
    let (transfer_count, flags) =
        scan_wallet_with_progress(&client, &args.address, &args.api_key, |count| {
            println!("{}", report::fetched_line(count))
        })
        .await?;

    tracing::info!(
        address = %args.address,
        transfers = transfer_count,
        flags = flags.len(),
        "Scan complete"
    );

    print!("{}", ScanReport::new(&flags));

    Ok(())
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
