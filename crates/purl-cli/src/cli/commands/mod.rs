//! CLI command handlers. Each command is in its own file.
//!
//! Handlers write to a caller-supplied writer so tests can capture output.

mod check;
mod compile;
mod filter;
mod request;

pub use check::run_check;
pub use compile::run_compile;
pub use filter::run_filter;
pub use request::run_request;
