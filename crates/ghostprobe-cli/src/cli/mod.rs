//! CLI for the ghostprobe network helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghostprobe_core::config;
use ghostprobe_core::HttpClient;

use commands::{run_check, run_head, run_online, run_resolve};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ghostprobe")]
#[command(about = "ghostprobe: find and check Ghost blogs over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Confirm a URL hosts a Ghost blog and print its canonical address.
    Check {
        /// Blog address as entered by the user (e.g. http://blog.example.com).
        url: String,
    },

    /// Send a HEAD request and print status, final URL and headers.
    Head {
        /// Absolute HTTP/HTTPS URL.
        url: String,
    },

    /// Resolve a relative path against a base URL.
    Resolve {
        /// Base URL, e.g. https://blog.example.com.
        base: String,
        /// Relative, protocol-relative or absolute path.
        path: String,
    },

    /// Report whether any network interface is connected.
    Online,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check { url } => run_check(&http_client()?, &url).await?,
            CliCommand::Head { url } => run_head(&http_client()?, &url).await?,
            CliCommand::Resolve { base, path } => run_resolve(&base, &path),
            CliCommand::Online => run_online()?,
        }

        Ok(())
    }
}

fn http_client() -> Result<HttpClient> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(HttpClient::new(cfg))
}
