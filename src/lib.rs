//! A minimal HTTP server with ordered route dispatch.
//!
//! This library provides a small HTTP server built around a single idea: an
//! ordered routing table. Routes are registered once at startup and evaluated
//! strictly in registration order; the first entry whose pattern and method
//! constraint both match the incoming request wins.
//!
//! # Features
//!
//! - Parse HTTP requests from byte slices
//! - Exact, prefix, parameterized (`/user/:id`) and regex route patterns
//! - Per-route HTTP method constraints (or `Any` for catch-all mounts)
//! - Path parameter capture from template segments
//! - JSON serialization for response bodies
//! - Proper error handling with descriptive error messages
//! - Simple async server loop with connection limiting
//!
//! # Examples
//!
//! ## Routing
//!
//! ```
//! use tinyroute_rs::{Router, Pattern, MethodFilter, Method, HttpResponse, StatusCode};
//!
//! let router = Router::new()
//!     .route(Pattern::exact("/user"), MethodFilter::Only(Method::GET), |_req, _params| async {
//!         Ok(HttpResponse::new(StatusCode::Ok)
//!             .with_content_type("text/plain")
//!             .with_body_string("a user"))
//!     })
//!     .route(Pattern::template("/user/:userId"), MethodFilter::Only(Method::GET), |_req, params| async move {
//!         Ok(HttpResponse::new(StatusCode::Ok)
//!             .with_content_type("text/plain")
//!             .with_body_string(format!("user {}", &params["userId"])))
//!     });
//! # let _ = router;
//! ```
//!
//! ## Parsing
//!
//! ```
//! use tinyroute_rs::parse_request;
//!
//! let request_bytes = b"GET /user/707 HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request: {}", err);
//!     }
//! }
//! ```
//!
//! See the `demos` directory for complete runnable servers, one per routing
//! feature (static mounts, regex routes, route parameters, method-specific
//! handlers, and registration-order semantics).

// Export the parser module
pub mod parser;

// Export the router module
pub mod router;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, parse_request};
pub use router::{Dispatch, MethodFilter, PathParams, Pattern, Router};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
