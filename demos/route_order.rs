//! Registration order decides, not specificity.
//!
//! Three catch-all mounts in a deliberately awkward order. `/test` takes
//! everything under it, then `/` takes everything else, so the `/test/1`
//! entry registered last can never win: a request for `/test/1` gets
//! "Hello from the test server". This is not a bug in the router; it is what
//! first-match dispatch over an ordered table does, kept here on purpose.

use tinyroute_rs::{HttpResponse, HttpServer, MethodFilter, Pattern, Router, ServerConfig, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let router = Router::new()
        .route(Pattern::prefix("/test"), MethodFilter::Any, |_req, _params| async {
            Ok(HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body_string("Hello from the test server"))
        })
        .route(Pattern::prefix("/"), MethodFilter::Any, |_req, _params| async {
            Ok(HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body_string("Hello from the server"))
        })
        // Unreachable: shadowed by both earlier mounts.
        .route(Pattern::prefix("/test/1"), MethodFilter::Any, |_req, _params| async {
            Ok(HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body_string("Hello from the test1 server"))
        });

    let server = HttpServer::new(ServerConfig::localhost(7779), router);

    // Start the server
    server.start().await?;

    Ok(())
}
