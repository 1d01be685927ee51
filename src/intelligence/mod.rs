pub mod classifier;

pub use classifier::{
    detect_scam_tokens, has_oversized_identifier, has_scam_keyword, is_null_or_self_origin,
};
