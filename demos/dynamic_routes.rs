//! Route parameters.
//!
//! `/user/:userId` captures one path segment, `/user/:userId/:name/:password`
//! captures three. Captured values are logged as they arrive.

use log::info;
use serde::Serialize;
use tinyroute_rs::{
    HttpResponse, HttpServer, Method, MethodFilter, Pattern, Router, ServerConfig, StatusCode,
};

#[derive(Serialize)]
struct Name {
    #[serde(rename = "firstName")]
    first_name: &'static str,
    #[serde(rename = "lastName")]
    last_name: &'static str,
}

fn name() -> Name {
    Name {
        first_name: "Setty",
        last_name: "Ruthvik",
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let router = Router::new()
        .route(
            Pattern::template("/user/:userId"),
            MethodFilter::Only(Method::GET),
            |_req, params| async move {
                info!("params: {params:?}");
                HttpResponse::new(StatusCode::Ok).with_json(&name())
            },
        )
        .route(
            Pattern::template("/user/:userId/:name/:password"),
            MethodFilter::Only(Method::GET),
            |_req, params| async move {
                info!("params: {params:?}");
                HttpResponse::new(StatusCode::Ok).with_json(&name())
            },
        );

    let server = HttpServer::new(ServerConfig::localhost(7777), router);

    // Start the server
    server.start().await?;

    Ok(())
}
