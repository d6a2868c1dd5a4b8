//! Regex route patterns.
//!
//! `ab?c` matches both `/abc` and `/ac`; `a(bc)+d` matches `/abcd`,
//! `/abcbcd`, `/abcbcbcd` and so on. Anything else is a 404.

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
        .route(Pattern::regex("ab?c")?, MethodFilter::Only(Method::GET), |_req, _params| async {
            HttpResponse::new(StatusCode::Ok).with_json(&name())
        })
        .route(Pattern::regex("a(bc)+d")?, MethodFilter::Only(Method::GET), |_req, _params| async {
            HttpResponse::new(StatusCode::Ok).with_json(&name())
        });

    let server = HttpServer::new(ServerConfig::localhost(666), router);

    // Start the server
    server.start().await?;

    Ok(())
}
