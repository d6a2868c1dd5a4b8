//! A single catch-all mount: every request under `/tset`, with any HTTP
//! method, gets the same reply.

use tinyroute_rs::{HttpResponse, HttpServer, MethodFilter, Pattern, Router, ServerConfig, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let router = Router::new().route(Pattern::prefix("/tset"), MethodFilter::Any, |_req, _params| async {
        Ok(HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_string("Hello from the server"))
    });

    let server = HttpServer::new(ServerConfig::localhost(3000), router);

    // Start the server
    server.start().await?;

    Ok(())
}
