//! Transport error type.

use thiserror::Error;

use super::classify::is_connection_failure;

/// Failure of a single transport call.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the server or proxy (refused, DNS, proxy resolution).
    #[error("cannot establish connection: {0}")]
    Connection(#[source] curl::Error),
    /// Any other libcurl failure (timeout, TLS, protocol error, ...).
    #[error("transport failed: {0}")]
    Curl(#[source] curl::Error),
    /// The prepared request could not be encoded for the wire.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    pub fn is_connection(&self) -> bool {
        matches!(self, TransportError::Connection(_))
    }
}

impl From<curl::Error> for TransportError {
    fn from(e: curl::Error) -> Self {
        if is_connection_failure(&e) {
            TransportError::Connection(e)
        } else {
            TransportError::Curl(e)
        }
    }
}

impl From<curl::FormError> for TransportError {
    fn from(e: curl::FormError) -> Self {
        TransportError::InvalidRequest(e.to_string())
    }
}
