//! REST API endpoint implementations.
//!
//! Functions in this module perform exactly one HTTP exchange each; retry
//! and pagination live in the client layer.

mod alerts;
mod auth;
mod request;
pub mod url_encoding;

pub use alerts::probe_alerts_page;
pub use auth::authorize;
pub use request::send_request;
