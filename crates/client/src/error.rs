//! Client error taxonomy.

use thiserror::Error;

/// Result type used across the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything an API call can fail with. Callers branch on the kind; no
/// recovery or retry happens inside the client.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Any other non-2xx response; carries the raw status and body for
    /// diagnostics.
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Connection-level failure in the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request or response document failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
