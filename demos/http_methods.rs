//! Method-specific handlers on one path.
//!
//! GET, POST and DELETE each get their own `/user` entry, so the method
//! decides which handler runs. The `/test` mount at the end takes every
//! method.

use serde::Serialize;
use tinyroute_rs::{
    HttpResponse, HttpServer, Method, MethodFilter, Pattern, Router, ServerConfig, StatusCode,
};

#[derive(Serialize)]
struct Name {
    firstname: &'static str,
    lastname: &'static str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let router = Router::new()
        .route(Pattern::exact("/user"), MethodFilter::Only(Method::GET), |_req, _params| async {
            HttpResponse::new(StatusCode::Ok).with_json(&Name {
                firstname: "Setty",
                lastname: "Ruthvik",
            })
        })
        .route(Pattern::exact("/user"), MethodFilter::Only(Method::POST), |_req, _params| async {
            Ok(HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body_string("Data successfully saved in the database"))
        })
        .route(Pattern::exact("/user"), MethodFilter::Only(Method::DELETE), |_req, _params| async {
            Ok(HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body_string("Deleted Successfully"))
        })
        .route(Pattern::prefix("/test"), MethodFilter::Any, |_req, _params| async {
            Ok(HttpResponse::new(StatusCode::Ok)
                .with_content_type("text/plain")
                .with_body_string("Hello from the test server"))
        });

    let server = HttpServer::new(ServerConfig::localhost(8999), router);

    // Start the server
    server.start().await?;

    Ok(())
}
