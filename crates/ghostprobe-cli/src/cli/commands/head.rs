//! `ghostprobe head <url>` – one HEAD request, printed.

use anyhow::Result;
use ghostprobe_core::status::{is_not_modified, is_unauthorized, is_unrecoverable_error};
use ghostprobe_core::{check_url, HttpClient};

pub async fn run_head(client: &HttpClient, url: &str) -> Result<()> {
    let response = check_url(url, client).await?;
    println!("HTTP {}", response.status);
    println!("URL: {}", response.effective_url);
    for (name, value) in &response.headers {
        println!("{name}: {value}");
    }
    let r = Some(&response);
    println!(
        "success={} unauthorized={} not_modified={} unrecoverable={}",
        response.is_success(),
        is_unauthorized(r),
        is_not_modified(r),
        is_unrecoverable_error(r)
    );
    Ok(())
}
