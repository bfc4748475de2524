pub mod config;
pub mod logging;

pub mod connectivity;
pub mod error;
pub mod http;
pub mod probe;
pub mod status;
pub mod url_model;

pub use error::ProbeError;
pub use http::{check_url, network_call, HeadResponse, HttpClient};
pub use probe::check_ghost_blog;
pub use url_model::make_absolute_url;
