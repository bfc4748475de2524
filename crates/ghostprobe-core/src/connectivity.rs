//! Device connectivity: is any non-loopback interface up with a link?
//!
//! Reads `/sys/class/net` on Linux. Errors are treated as "not connected".

use std::fs;
use std::path::Path;

#[cfg(target_os = "linux")]
const SYSFS_NET: &str = "/sys/class/net";

/// True if the device has at least one active, connected network interface.
#[cfg(target_os = "linux")]
pub fn is_connected() -> bool {
    is_connected_at(Path::new(SYSFS_NET))
}

#[cfg(not(target_os = "linux"))]
pub fn is_connected() -> bool {
    false
}

/// Like [`is_connected`] but reads interfaces from `root` (a `/sys/class/net` layout).
pub fn is_connected_at(root: &Path) -> bool {
    let entries = match fs::read_dir(root) {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!("cannot list {}: {}", root.display(), e);
            return false;
        }
    };
    entries.flatten().any(|entry| {
        let name = entry.file_name();
        if name == "lo" {
            return false;
        }
        let up = interface_is_up(&entry.path());
        if up {
            tracing::debug!("interface {} is up", name.to_string_lossy());
        }
        up
    })
}

/// `operstate` "up", or "unknown" (tun/ppp) with carrier present.
fn interface_is_up(dir: &Path) -> bool {
    let operstate = read_trimmed(&dir.join("operstate"));
    let carrier = read_trimmed(&dir.join("carrier"));
    let has_carrier = carrier.as_deref() == Some("1");
    match operstate.as_deref() {
        Some("up") => carrier.is_none() || has_carrier,
        Some("unknown") => has_carrier,
        _ => false,
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}
