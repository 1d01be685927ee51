use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use airdrop_scanner::explorer::ExplorerClient;

pub const WALLET: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
pub const API_KEY: &str = "TESTKEY123";

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Arc<String>,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// In-process stand-in for the explorer API. Answers every `GET /api` with
/// a fixed status and body and records the query string it was sent.
pub struct StubExplorer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl StubExplorer {
    #[allow(dead_code)]
    pub fn client(&self) -> ExplorerClient {
        ExplorerClient::with_base_url(reqwest::Client::new(), &self.base_url)
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().expect("stub lock poisoned").clone()
    }
}

async fn handle(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state
        .requests
        .lock()
        .expect("stub lock poisoned")
        .push(params);
    (state.status, state.body.as_ref().clone())
}

/// Start a stub explorer on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_stub_explorer(status: StatusCode, body: impl Into<String>) -> StubExplorer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body: Arc::new(body.into()),
        requests: requests.clone(),
    };

    let app = Router::new().route("/api", get(handle)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub explorer");
    let addr = listener.local_addr().expect("Stub explorer has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    StubExplorer {
        base_url: format!("http://{addr}/api"),
        requests,
    }
}

/// One `tokentx` entry in Etherscan's wire format.
#[allow(dead_code)]
pub fn transfer_json(name: &str, symbol: &str, contract: &str, from: &str) -> serde_json::Value {
    serde_json::json!({
        "blockNumber": "19000000",
        "timeStamp": "1705000000",
        "hash": "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
        "from": from,
        "to": WALLET.to_lowercase(),
        "value": "1000000000000000000",
        "contractAddress": contract,
        "tokenName": name,
        "tokenSymbol": symbol,
        "tokenDecimal": "18",
        "confirmations": "1200"
    })
}

#[allow(dead_code)]
pub fn ok_envelope(result: serde_json::Value) -> String {
    serde_json::json!({ "status": "1", "message": "OK", "result": result }).to_string()
}
