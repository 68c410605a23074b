//! Classify curl errors for dispatch: connection failures are fatal to a run.

/// True for failures that mean the target (or proxy) cannot be reached at all.
pub fn is_connection_failure(e: &curl::Error) -> bool {
    e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
}
