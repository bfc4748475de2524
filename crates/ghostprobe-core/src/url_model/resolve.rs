//! Join a blog base URL with a possibly relative path.

use super::Scheme;

/// Resolves `relative` against `base` and returns one absolute URL string.
///
/// - Protocol-relative input (`//host/path`) always gets `http:`.
/// - Input that already starts with `http://` or `https://` is returned as-is.
/// - Otherwise `base` and `relative` are joined with exactly one `/` at the
///   junction.
///
/// Malformed input yields a malformed result; nothing is validated.
///
/// # Examples
///
/// - `make_absolute_url("http://x.com/", "/a")` → `"http://x.com/a"`
/// - `make_absolute_url("http://x.com", "a")` → `"http://x.com/a"`
pub fn make_absolute_url(base: &str, relative: &str) -> String {
    if relative.starts_with("//") {
        return format!("http:{relative}");
    }

    if Scheme::of(relative).is_some() {
        return relative.to_string();
    }

    let base_has_slash = base.ends_with('/');
    let rel_has_slash = relative.starts_with('/');
    match (base_has_slash, rel_has_slash) {
        (true, true) => format!("{}{}", base, &relative[1..]),
        (true, false) | (false, true) => format!("{base}{relative}"),
        (false, false) => format!("{base}/{relative}"),
    }
}
