//! URL modeling: scheme detection and base/relative joining.
//!
//! Works on plain strings with prefix/suffix checks only. Nothing here parses
//! or validates a URL; see `http::validate_url` for that.

mod resolve;
mod scheme;

pub use resolve::make_absolute_url;
pub use scheme::Scheme;
