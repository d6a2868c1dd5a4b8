//! HTTP parser module.
//!
//! This module parses the request line and headers of an HTTP request. The
//! router only consumes the method and the path; the body is intentionally
//! left unread.

mod request;
mod method;
mod version;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
