//! Tests for the HTTP server implementation.

#[cfg(test)]
mod server_tests {
    use std::io::{self, Cursor};
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll};
    use serde::Serialize;
    use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};

    use crate::parser::Method;
    use crate::router::{MethodFilter, Pattern, Router};
    use crate::server::{Error, HttpResponse, HttpServer, ServerConfig, StatusCode};

    // Mock TcpStream for testing
    struct MockTcpStream {
        read_data: Cursor<Vec<u8>>,
        write_data: Vec<u8>,
    }

    impl MockTcpStream {
        fn new(read_data: Vec<u8>) -> Self {
            Self {
                read_data: Cursor::new(read_data),
                write_data: Vec::new(),
            }
        }

        fn written_data(&self) -> &[u8] {
            &self.write_data
        }
    }

    impl AsyncRead for MockTcpStream {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            let this = self.get_mut();
            let n = std::io::Read::read(&mut this.read_data, buf.initialize_unfilled())?;
            buf.advance(n);
            Poll::Ready(Ok(()))
        }
    }

    impl AsyncWrite for MockTcpStream {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            let this = self.get_mut();
            this.write_data.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    async fn serve_one(router: Arc<Router>, request: &[u8]) -> (Result<(), Error>, String) {
        let mut stream = MockTcpStream::new(request.to_vec());
        let result = HttpServer::handle_connection(&mut stream, router, 1024).await;
        let response = String::from_utf8_lossy(stream.written_data()).into_owned();
        (result, response)
    }

    fn test_router() -> Arc<Router> {
        Arc::new(
            Router::new()
                .route(Pattern::exact("/user"), MethodFilter::Only(Method::GET), |_req, _params| async {
                    Ok(HttpResponse::new(StatusCode::Ok)
                        .with_content_type("text/plain")
                        .with_body_string("a user"))
                })
                .route(Pattern::prefix("/test"), MethodFilter::Any, |_req, _params| async {
                    Ok(HttpResponse::new(StatusCode::Ok)
                        .with_content_type("text/plain")
                        .with_body_string("Hello from the test server"))
                }),
        )
    }

    #[tokio::test]
    async fn test_server_creation() {
        let config = ServerConfig {
            addr: "127.0.0.1:8080".parse().unwrap(),
            max_connections: 100,
            read_buffer_size: 4096,
        };

        let server = HttpServer::new(config.clone(), Router::new());
        assert_eq!(server.config.addr, config.addr);
        assert_eq!(server.config.max_connections, config.max_connections);
        assert_eq!(server.config.read_buffer_size, config.read_buffer_size);
        assert!(server.router.routes().is_empty());
    }

    #[tokio::test]
    async fn test_localhost_config() {
        let config = ServerConfig::localhost(8999);
        assert_eq!(config.addr, "127.0.0.1:8999".parse().unwrap());
        assert_eq!(config.max_connections, ServerConfig::default().max_connections);
    }

    #[tokio::test]
    async fn test_exact_route_response() {
        let request = b"GET /user HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(test_router(), request).await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: text/plain\r\n"));
        assert!(response.contains("a user"));
    }

    #[tokio::test]
    async fn test_prefix_route_matches_subpaths() {
        let request = b"GET /test/anything_written HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(test_router(), request).await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Hello from the test server"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let request = b"GET /nonexistent HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(test_router(), request).await;

        assert!(matches!(result.unwrap_err(), Error::NotFound(_)));
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(response.contains("Not found: /nonexistent"));
    }

    #[tokio::test]
    async fn test_method_mismatch_is_not_found() {
        // No 405: a wrong-method entry simply does not match, and with no
        // other entry left the request is a plain 404.
        let request = b"POST /user HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(test_router(), request).await;

        assert!(matches!(result.unwrap_err(), Error::NotFound(_)));
        assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    }

    #[tokio::test]
    async fn test_invalid_request_is_bad_request() {
        let request = b"INVALID REQUEST";
        let (result, response) = serve_one(test_router(), request).await;

        assert!(matches!(result.unwrap_err(), Error::ParseError(_)));
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
        assert!(response.contains("Error parsing request:"));
    }

    #[tokio::test]
    async fn test_failing_handler_is_internal_server_error() {
        let router = Arc::new(Router::new().route(
            Pattern::exact("/boom"),
            MethodFilter::Any,
            |_req, _params| async { Err(Error::HandlerFailure("boom".to_string())) },
        ));

        let request = b"GET /boom HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(router, request).await;

        assert!(matches!(result.unwrap_err(), Error::HandlerFailure(_)));
        assert!(response.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
        assert!(response.contains("Internal server error:"));
    }

    #[tokio::test]
    async fn test_registration_order_shadowing_over_the_wire() {
        let router = Arc::new(
            Router::new()
                .route(Pattern::prefix("/"), MethodFilter::Any, |_req, _params| async {
                    Ok(HttpResponse::new(StatusCode::Ok)
                        .with_content_type("text/plain")
                        .with_body_string("Hello from the server"))
                })
                .route(Pattern::prefix("/test/1"), MethodFilter::Any, |_req, _params| async {
                    Ok(HttpResponse::new(StatusCode::Ok)
                        .with_content_type("text/plain")
                        .with_body_string("Hello from the test1 server"))
                }),
        );

        let request = b"GET /test/1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(router, request).await;

        assert!(result.is_ok());
        assert!(response.contains("Hello from the server"));
        assert!(!response.contains("test1"));
    }

    #[derive(Serialize)]
    struct Name {
        #[serde(rename = "firstName")]
        first_name: &'static str,
        #[serde(rename = "lastName")]
        last_name: &'static str,
    }

    #[tokio::test]
    async fn test_json_route_response() {
        let router = Arc::new(Router::new().route(
            Pattern::template("/user/:userId"),
            MethodFilter::Only(Method::GET),
            |_req, _params| async {
                HttpResponse::new(StatusCode::Ok).with_json(&Name {
                    first_name: "Setty",
                    last_name: "Ruthvik",
                })
            },
        ));

        let request = b"GET /user/707 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let (result, response) = serve_one(router, request).await;

        assert!(result.is_ok());
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: application/json\r\n"));
        assert!(response.contains(r#""firstName":"Setty""#));
        assert!(response.contains(r#""lastName":"Ruthvik""#));
    }

    #[tokio::test]
    async fn test_connection_limit_response() {
        // The response sent when the semaphore has no free permit
        async fn handle_connection_limit_exceeded(socket: &mut MockTcpStream) {
            let response = HttpResponse::new(StatusCode::ServiceUnavailable)
                .with_content_type("text/plain")
                .with_body_string("Server is at capacity, please try again later");

            let _ = socket.write_all(&response.to_bytes()).await;
        }

        let mut socket = MockTcpStream::new(Vec::new());
        handle_connection_limit_exceeded(&mut socket).await;

        let response = String::from_utf8_lossy(socket.written_data());
        assert!(response.starts_with("HTTP/1.1 503 Service Unavailable\r\n"));
        assert!(response.contains("Server is at capacity, please try again later"));
    }
}
