//! The router: an ordered routing table with first-match dispatch.

use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::parser::HttpRequest;
use crate::router::pattern::{PathParams, Pattern};
use crate::router::route::{HandlerFuture, MethodFilter, Route};
use crate::server::{Error, HttpResponse};

/// The outcome of dispatching one request.
pub enum Dispatch {
    /// An entry matched; carries the handler's result. A failed handler is
    /// fatal for that request only.
    Matched(Result<HttpResponse, Error>),
    /// No entry matched the request.
    NotFound,
}

/// An ordered routing table.
///
/// Routes are registered once at startup, in builder style, and the finished
/// router is read-only: it may safely be shared across any number of in-flight
/// requests. Entries are never reordered or deduplicated, and dispatch always
/// returns the first full match in registration order.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route entry.
    ///
    /// Registration order is significant: an earlier, broader pattern (for
    /// example a `/` prefix mount) shadows every later entry it overlaps.
    pub fn route<F, Fut>(mut self, pattern: Pattern, filter: MethodFilter, handler: F) -> Self
    where
        F: Fn(HttpRequest, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        let handler = Arc::new(move |req: HttpRequest, params: PathParams| -> HandlerFuture {
            Box::pin(handler(req, params))
        });

        self.routes.push(Route {
            pattern,
            filter,
            handler,
        });
        self
    }

    /// The registered entries, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Dispatch a request to the first matching entry.
    ///
    /// Entries are evaluated strictly in registration order. An entry matches
    /// when its method constraint allows the request method and its pattern
    /// matches the request path; a method mismatch simply fails that entry and
    /// the scan continues. The first full match wins and no further entries
    /// are evaluated.
    pub async fn dispatch(&self, request: HttpRequest) -> Dispatch {
        for route in &self.routes {
            if !route.filter.allows(request.method) {
                continue;
            }

            if let Some(params) = route.pattern.matches(&request.path) {
                debug!(
                    "{method} {path} -> {filter} {pattern}",
                    method = request.method,
                    path = request.path,
                    filter = route.filter,
                    pattern = route.pattern
                );
                return Dispatch::Matched((route.handler)(request, params).await);
            }
        }

        Dispatch::NotFound
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
