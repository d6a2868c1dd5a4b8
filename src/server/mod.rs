//! HTTP server implementation for tinyroute-rs.
//!
//! This module provides a simple, efficient HTTP server that reads one
//! request per connection and answers it through an ordered [`Router`].
//!
//! [`Router`]: crate::router::Router

mod response;
mod config;
mod error;
mod http_server;
mod tests;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
