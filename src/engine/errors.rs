use thiserror::Error;

/// Errors surfaced by the read/analytics operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid query parameter `{param}`: {reason}")]
    InvalidQuery { param: String, reason: String },

    #[error("order not found: {id}")]
    NotFound { id: String },

    #[error("store access failed: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    pub fn invalid_query(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            param: param.into(),
            reason: reason.into(),
        }
    }
}

/// Errors produced by a document store implementation.
///
/// `Unavailable` is infrastructure failure and propagates as-is; retry
/// policy, if any, belongs to the store, not to the engines above it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed stored document: {0}")]
    BadDocument(String),
}
