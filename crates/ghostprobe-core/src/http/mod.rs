//! HTTP HEAD requests through libcurl.
//!
//! `HttpClient` carries the request settings from `ProbeConfig`; each call
//! creates its own curl handle, so a client can be cloned and shared freely.
//! Redirects are followed by libcurl and the final URL is reported back in
//! `HeadResponse::effective_url`.

mod call;
mod parse;

pub use call::{network_call, AbortHandle};

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Status, final URL and headers of a completed HEAD request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    /// HTTP status of the last response in the redirect chain.
    pub status: u32,
    /// URL actually reached after following redirects.
    pub effective_url: String,
    /// Headers of the last response, in arrival order.
    pub headers: Vec<(String, String)>,
}

impl HeadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Reusable HTTP client configuration.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    config: ProbeConfig,
}

impl HttpClient {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Builds a HEAD request for `url`. Fails with `MalformedUrl` if the URL
    /// cannot be requested; no I/O happens here.
    pub fn head(&self, url: &str) -> Result<Request, ProbeError> {
        let parsed = validate_url(url)?;
        Ok(Request {
            url: parsed.into(),
            connect_timeout: Duration::from_secs(self.config.connect_timeout_secs),
            timeout: Duration::from_secs(self.config.timeout_secs),
            max_redirections: self.config.max_redirections,
            user_agent: self.config.user_agent.clone(),
            abort: Arc::new(AtomicBool::new(false)),
        })
    }
}

/// A prepared HEAD request, consumed by [`network_call`].
#[derive(Debug)]
pub struct Request {
    url: String,
    connect_timeout: Duration,
    timeout: Duration,
    max_redirections: u32,
    user_agent: Option<String>,
    abort: Arc<AtomicBool>,
}

impl Request {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Handle that aborts this request from another task or thread.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle::new(Arc::clone(&self.abort))
    }
}

/// Issues a HEAD request for `url` with `client`'s settings.
///
/// Only status and headers are transferred. A URL that cannot be requested
/// (whitespace, unknown scheme, no host) fails with `MalformedUrl` before any
/// connection is attempted.
pub async fn check_url(url: &str, client: &HttpClient) -> Result<HeadResponse, ProbeError> {
    let request = client.head(url)?;
    network_call(request).await
}

/// Rejects URLs libcurl would either refuse or silently "fix".
pub(crate) fn validate_url(raw: &str) -> Result<url::Url, ProbeError> {
    let malformed = || ProbeError::MalformedUrl(format!("invalid Ghost admin address: {raw}"));

    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(malformed());
    }
    let parsed = url::Url::parse(raw).map_err(|_| malformed())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(malformed());
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(malformed());
    }
    Ok(parsed)
}
