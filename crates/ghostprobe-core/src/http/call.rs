//! Run one blocking libcurl transfer as a cancellable future.
//!
//! The transfer runs on tokio's blocking pool. Cancellation is cooperative:
//! an abort flag is polled from libcurl's progress callback, which fires at
//! least once per second while the transfer is idle. The flag is raised
//! either by an [`AbortHandle`] or by dropping the future returned from
//! [`network_call`] before it completes.

use super::{parse, HeadResponse, Request};
use crate::error::ProbeError;
use std::str;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Aborts an in-flight request; cloneable and usable from any thread.
#[derive(Debug, Clone)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub(super) fn new(flag: Arc<AtomicBool>) -> Self {
        Self(flag)
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Raises the abort flag if the owning future is dropped before completion.
struct AbortOnDrop {
    flag: Arc<AtomicBool>,
    armed: bool,
}

impl AbortOnDrop {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!("network call dropped before completion, aborting transfer");
            self.flag.store(true, Ordering::Relaxed);
        }
    }
}

/// Executes `request` and resolves exactly once with the response or the
/// transport error. Never retries.
///
/// Dropping the returned future aborts the transfer and closes its
/// connection; nothing is delivered afterwards. Aborting through the
/// request's [`AbortHandle`] while the future is still awaited resolves it
/// with `ProbeError::Cancelled`.
pub async fn network_call(request: Request) -> Result<HeadResponse, ProbeError> {
    let flag = Arc::clone(&request.abort);
    if flag.load(Ordering::Relaxed) {
        return Err(ProbeError::Cancelled);
    }
    let guard = AbortOnDrop {
        flag: Arc::clone(&flag),
        armed: true,
    };

    let joined = tokio::task::spawn_blocking(move || perform(&request)).await;
    guard.disarm();

    match joined {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) if e.is_aborted_by_callback() && flag.load(Ordering::Relaxed) => {
            Err(ProbeError::Cancelled)
        }
        Ok(Err(e)) => {
            tracing::debug!("HEAD request failed: {}", e);
            Err(ProbeError::Transport(e))
        }
        Err(e) => Err(ProbeError::Join(e.to_string())),
    }
}

/// Performs the HEAD request on the current thread.
fn perform(request: &Request) -> Result<HeadResponse, curl::Error> {
    let mut lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&request.url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(request.max_redirections)?;
    easy.connect_timeout(request.connect_timeout)?;
    easy.timeout(request.timeout)?;
    if let Some(ua) = &request.user_agent {
        easy.useragent(ua)?;
    }
    easy.progress(true)?;

    tracing::debug!("HEAD {}", request.url);
    {
        let abort = &request.abort;
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                lines.push(s.trim_end().to_string());
            }
            true
        })?;
        // Returning false makes libcurl fail with CURLE_ABORTED_BY_CALLBACK.
        transfer.progress_function(|_, _, _, _| !abort.load(Ordering::Relaxed))?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let effective_url = easy
        .effective_url()?
        .unwrap_or(request.url.as_str())
        .to_string();
    let hops = parse::response_count(&lines).saturating_sub(1);
    if hops > 0 {
        tracing::debug!("followed {} redirect(s) to {}", hops, effective_url);
    }
    tracing::debug!("HEAD {} -> HTTP {}", effective_url, status);

    Ok(HeadResponse {
        status,
        effective_url,
        headers: parse::final_headers(&lines),
    })
}
