//! Error type for URL checks and the admin probe.

use std::error::Error as StdError;

use crate::status;

/// Failure of a URL check or blog probe.
///
/// Transport failures are passed through unchanged from libcurl; use
/// [`ProbeError::is_connection_error`] to branch on refused/timed-out
/// connections.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The URL could not be turned into a request. Raised before any I/O.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),
    /// The admin page returned 404; carries the blog URL exactly as supplied.
    #[error("no Ghost blog found at {url}")]
    UrlNotFound { url: String },
    /// Any other non-2xx status.
    #[error("response code {0} when requesting admin page")]
    UnexpectedStatus(u32),
    /// libcurl reported an error (connect, timeout, TLS, DNS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// The call was aborted through its `AbortHandle`.
    #[error("request cancelled")]
    Cancelled,
    /// The blocking transfer task did not finish normally.
    #[error("network task failed: {0}")]
    Join(String),
}

impl ProbeError {
    /// True for refused connections and timeouts.
    pub fn is_connection_error(&self) -> bool {
        status::is_connection_error(self as &(dyn StdError + 'static))
    }

    /// True when the probe got a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProbeError::UrlNotFound { .. })
    }
}
