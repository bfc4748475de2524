//! Parse raw header lines collected from libcurl.
//!
//! With redirects followed, libcurl hands over the header block of every hop.
//! Each block starts with a status line (`HTTP/1.1 301 ...`).

/// Headers of the last response in `lines`.
pub(crate) fn final_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_status_line(line) {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}

/// Number of responses seen, i.e. redirect hops + 1.
pub(crate) fn response_count(lines: &[String]) -> usize {
    lines.iter().filter(|l| is_status_line(l.trim())).count()
}

fn is_status_line(line: &str) -> bool {
    line.starts_with("HTTP/")
}
