//! `ghostprobe check <url>` – probe for a Ghost admin page.

use anyhow::Result;
use ghostprobe_core::{check_ghost_blog, HttpClient, ProbeError};

pub async fn run_check(client: &HttpClient, url: &str) -> Result<()> {
    match check_ghost_blog(url, client).await {
        Ok(blog) => {
            println!("{blog}");
            Ok(())
        }
        Err(ProbeError::UrlNotFound { url }) => {
            anyhow::bail!("no Ghost blog at {url} (admin page returned 404)")
        }
        Err(e) if e.is_connection_error() => {
            Err(anyhow::Error::new(e).context(format!("could not reach {url}")))
        }
        Err(e) => Err(e.into()),
    }
}
