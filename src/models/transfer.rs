use serde::{Deserialize, Serialize};

/// One observed token transfer, as reported by the explorer.
///
/// Every field is kept verbatim (no address checksumming or case folding);
/// fields the explorer omitted are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub token_name: String,
    pub token_symbol: String,
    pub contract_address: String,
    pub from: String,
    pub to: String,
}

impl TransferRecord {
    /// Identity of the token this transfer moved: `name::symbol::contract`.
    pub fn dedup_key(&self) -> String {
        format!(
            "{}::{}::{}",
            self.token_name, self.token_symbol, self.contract_address
        )
    }
}
