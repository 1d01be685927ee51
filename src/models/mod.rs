pub mod flag;
pub mod transfer;

pub use flag::{Reason, SuspicionFlag};
pub use transfer::TransferRecord;
