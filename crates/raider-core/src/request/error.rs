//! Dispatch errors.

use thiserror::Error;

use crate::transport::TransportError;

/// Why `Request::send` produced no response.
///
/// Unresolved inputs are never an error (they are dropped); only the
/// transport can fail a send.
#[derive(Debug, Error)]
pub enum SendError {
    /// The target or proxy is unreachable. Fatal to the run; not retried.
    #[error("cannot establish connection to {url}")]
    Connection {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error(transparent)]
    Transport(TransportError),
}

impl SendError {
    /// Wrap a transport failure for `url`, keeping connection failures apart.
    pub fn from_transport(url: &str, e: TransportError) -> Self {
        if e.is_connection() {
            SendError::Connection {
                url: url.to_string(),
                source: e,
            }
        } else {
            SendError::Transport(e)
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, SendError::Connection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_are_kept_apart() {
        let e = SendError::from_transport("http://h/", curl::Error::new(7).into());
        assert!(e.is_connection());
        assert_eq!(e.to_string(), "cannot establish connection to http://h/");

        let e = SendError::from_transport("http://h/", curl::Error::new(28).into());
        assert!(!e.is_connection());
    }
}
