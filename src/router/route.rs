//! Route entries: a pattern, a method constraint, and a handler.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::{HttpRequest, Method};
use crate::router::pattern::{PathParams, Pattern};
use crate::server::{Error, HttpResponse};

/// Type alias for a boxed future that returns a Result<HttpResponse, Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>;

/// Type alias for a handler function that takes the request and its captured
/// path parameters and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(HttpRequest, PathParams) -> HandlerFuture + Send + Sync>;

/// The HTTP method constraint of a route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFilter {
    /// Matches every HTTP method (a catch-all mount).
    Any,
    /// Matches only the given method.
    Only(Method),
}

impl MethodFilter {
    /// Whether this constraint allows the given request method.
    pub fn allows(&self, method: Method) -> bool {
        match self {
            MethodFilter::Any => true,
            MethodFilter::Only(expected) => *expected == method,
        }
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFilter::Any => write!(f, "ANY"),
            MethodFilter::Only(method) => write!(f, "{method}"),
        }
    }
}

/// One entry in the routing table.
pub struct Route {
    /// The pattern to match against the request path.
    pub pattern: Pattern,
    /// The HTTP method constraint.
    pub filter: MethodFilter,
    /// The handler function.
    pub handler: HandlerFn,
}
