//! `ghostprobe online` – exit status reflects connectivity.

use anyhow::Result;
use ghostprobe_core::connectivity;

pub fn run_online() -> Result<()> {
    if connectivity::is_connected() {
        println!("connected");
        Ok(())
    } else {
        println!("offline");
        anyhow::bail!("no active network connection")
    }
}
