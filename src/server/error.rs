//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// No route matched the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A handler failed while producing its response.
    #[error("Handler failed: {0}")]
    HandlerFailure(String),

    /// JSON serialization error while building a response.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
