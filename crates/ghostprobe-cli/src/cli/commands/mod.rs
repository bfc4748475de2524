//! CLI command handlers, one per file.

mod check;
mod head;
mod online;
mod resolve;

pub use check::run_check;
pub use head::run_head;
pub use online::run_online;
pub use resolve::run_resolve;
