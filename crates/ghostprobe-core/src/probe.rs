//! Ghost admin probe: confirm a URL hosts a Ghost blog and find its canonical base URL.
//!
//! Sends one HEAD request to `<blog>/ghost/`. libcurl follows redirects, so a
//! blog entered as `http://` that upgrades to `https://` resolves to the
//! `https://` address.

use crate::error::ProbeError;
use crate::http::{check_url, HttpClient};
use crate::url_model::make_absolute_url;

/// Path of the Ghost admin interface.
pub const ADMIN_PAGE_PATH: &str = "/ghost/";

const HTTP_NOT_FOUND: u32 = 404;

/// Probes `blog_url` for a Ghost admin page and returns the blog's canonical
/// base URL, taken from the final URL after redirects.
///
/// - 2xx: the final URL with the trailing `/ghost/` (or `/ghost`) removed.
/// - 404: `ProbeError::UrlNotFound` carrying `blog_url` unchanged.
/// - any other status: `ProbeError::UnexpectedStatus`.
/// - unusable URL: `ProbeError::MalformedUrl`, before any I/O.
pub async fn check_ghost_blog(blog_url: &str, client: &HttpClient) -> Result<String, ProbeError> {
    let admin_url = make_absolute_url(blog_url, ADMIN_PAGE_PATH);
    tracing::debug!("probing Ghost admin page at {}", admin_url);

    let response = check_url(&admin_url, client).await?;
    if response.is_success() {
        let blog = blog_url_from_admin_url(&response.effective_url).to_string();
        tracing::info!("Ghost blog confirmed at {}", blog);
        Ok(blog)
    } else if response.status == HTTP_NOT_FOUND {
        Err(ProbeError::UrlNotFound {
            url: blog_url.to_string(),
        })
    } else {
        tracing::warn!("admin page {} returned HTTP {}", admin_url, response.status);
        Err(ProbeError::UnexpectedStatus(response.status))
    }
}

/// Strips a trailing `/ghost/` or `/ghost` from `url`; other URLs are returned unchanged.
pub fn blog_url_from_admin_url(url: &str) -> &str {
    let bare = ADMIN_PAGE_PATH.trim_end_matches('/');
    url.strip_suffix(ADMIN_PAGE_PATH)
        .or_else(|| url.strip_suffix(bare))
        .unwrap_or(url)
}
