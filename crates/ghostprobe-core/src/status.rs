//! Classify HTTP responses and transport errors.
//!
//! Response predicates take an optional response so callers can pass
//! "whatever we got back" without unwrapping; a missing response is never
//! unauthorized, not-modified, or unrecoverable.

use crate::http::HeadResponse;
use std::error::Error as StdError;
use std::io;

const HTTP_NOT_MODIFIED: u32 = 304;
const HTTP_UNAUTHORIZED: u32 = 401;
const HTTP_FORBIDDEN: u32 = 403;

/// 401, or 403 which Ghost sends in some cases where 401 is meant.
pub fn is_unauthorized(response: Option<&HeadResponse>) -> bool {
    match response {
        Some(r) => r.status == HTTP_UNAUTHORIZED || r.status == HTTP_FORBIDDEN,
        None => false,
    }
}

pub fn is_not_modified(response: Option<&HeadResponse>) -> bool {
    response.is_some_and(|r| r.status == HTTP_NOT_MODIFIED)
}

/// A client error the caller cannot recover from without new credentials.
/// The `>= 400` check is implied by `is_unauthorized` and kept as-is.
pub fn is_unrecoverable_error(response: Option<&HeadResponse>) -> bool {
    match response {
        Some(r) => r.status >= 400 && is_unauthorized(response),
        None => false,
    }
}

/// True if `error` (or anything in its `source()` chain) is a refused
/// connection or a timeout.
///
/// Recognizes `curl::Error` (`couldnt_connect`, `operation_timedout`) and
/// `std::io::Error` (`ConnectionRefused`, `TimedOut`). DNS failures,
/// cancellations and HTTP status errors are not connection errors.
pub fn is_connection_error(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(e) = current {
        if let Some(ce) = e.downcast_ref::<curl::Error>() {
            if ce.is_couldnt_connect() || ce.is_operation_timedout() {
                return true;
            }
        }
        if let Some(ioe) = e.downcast_ref::<io::Error>() {
            if matches!(ioe.kind(), io::ErrorKind::ConnectionRefused | io::ErrorKind::TimedOut) {
                return true;
            }
        }
        current = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProbeError;

    fn response(status: u32) -> HeadResponse {
        HeadResponse {
            status,
            effective_url: "https://blog.example.com/ghost/".to_string(),
            headers: Vec::new(),
        }
    }

    #[test]
    fn unauthorized_is_401_or_403() {
        assert!(is_unauthorized(Some(&response(401))));
        assert!(is_unauthorized(Some(&response(403))));
        for code in [200, 204, 301, 304, 400, 402, 404, 500] {
            assert!(!is_unauthorized(Some(&response(code))), "code {}", code);
        }
        assert!(!is_unauthorized(None));
    }

    #[test]
    fn not_modified_is_304_only() {
        assert!(is_not_modified(Some(&response(304))));
        assert!(!is_not_modified(Some(&response(200))));
        assert!(!is_not_modified(Some(&response(302))));
        assert!(!is_not_modified(None));
    }

    #[test]
    fn unrecoverable_matches_unauthorized() {
        assert!(is_unrecoverable_error(Some(&response(401))));
        assert!(is_unrecoverable_error(Some(&response(403))));
        assert!(!is_unrecoverable_error(Some(&response(400))));
        assert!(!is_unrecoverable_error(Some(&response(500))));
        assert!(!is_unrecoverable_error(None));
    }

    #[test]
    fn io_refused_and_timeout_are_connection_errors() {
        let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let timed_out = io::Error::new(io::ErrorKind::TimedOut, "timed out");
        let other = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(is_connection_error(&refused));
        assert!(is_connection_error(&timed_out));
        assert!(!is_connection_error(&other));
    }

    #[test]
    fn curl_codes_are_classified() {
        // CURLE_COULDNT_CONNECT = 7, CURLE_OPERATION_TIMEDOUT = 28, CURLE_COULDNT_RESOLVE_HOST = 6
        assert!(is_connection_error(&curl::Error::new(7)));
        assert!(is_connection_error(&curl::Error::new(28)));
        assert!(!is_connection_error(&curl::Error::new(6)));
    }

    #[test]
    fn wrapped_errors_are_found_through_source_chain() {
        let err = ProbeError::Transport(curl::Error::new(7));
        assert!(err.is_connection_error());
        let any = anyhow::Error::new(io::Error::new(io::ErrorKind::TimedOut, "slow"))
            .context("checking blog");
        assert!(is_connection_error(&*any));
    }

    #[test]
    fn probe_errors_without_transport_are_not_connection_errors() {
        assert!(!ProbeError::UnexpectedStatus(500).is_connection_error());
        assert!(!ProbeError::Cancelled.is_connection_error());
        assert!(!ProbeError::UrlNotFound { url: "http://x.com".into() }.is_connection_error());
    }
}
