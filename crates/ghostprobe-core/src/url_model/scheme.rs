//! The two URL schemes the client talks to.

/// Scheme prefix of an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Http, Scheme::Https];

    /// Prefix including the `://` separator, e.g. `"https://"`.
    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }

    /// Returns the scheme `url` starts with, if it is already absolute.
    /// Matching is case-sensitive.
    pub fn of(url: &str) -> Option<Scheme> {
        Self::ALL.into_iter().find(|s| url.starts_with(s.prefix()))
    }
}
