//! HTTP server implementation.

use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::signal;
use log::{info, warn, error};
use std::net::SocketAddr;

use crate::parser::parse_request;
use crate::router::{Dispatch, Router};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};

/// An HTTP server.
///
/// The server takes ownership of a finished [`Router`] at construction. The
/// routing table is read-only from then on and is shared across all in-flight
/// connections.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The routing table.
    pub router: Arc<Router>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and routes.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Display the server banner and registered routes.
    fn display_server_info(&self) {
        // Display the banner
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        // Display registered routes in registration order
        info!("Registered routes:");
        for route in self.router.routes() {
            info!("  {filter} {pattern}", filter = route.filter, pattern = route.pattern);
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: Arc<mpsc::Sender<()>>, tasks: &mut JoinSet<()>) {
        // Spawn a task to handle Ctrl+C
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Handle a new connection.
    async fn handle_new_connection(
        mut socket: tokio::net::TcpStream,
        addr: SocketAddr,
        semaphore: Arc<tokio::sync::Semaphore>,
        router: Arc<Router>,
        read_buffer_size: usize,
        tasks: &mut JoinSet<()>,
    ) {
        // Try to acquire a permit from the semaphore
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                // Send a 503 Service Unavailable response
                let response = HttpResponse::new(StatusCode::ServiceUnavailable)
                    .with_content_type("text/plain")
                    .with_body_string("Server is at capacity, please try again later");
                let _ = socket.write_all(&response.to_bytes()).await;
                return;
            }
        };

        // Spawn a task to handle the connection. A failing handler is fatal
        // for this request only; other in-flight requests are unaffected.
        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, router, read_buffer_size).await {
                error!("Error handling connection from {addr}: {e}");
            }
        });
    }

    /// Handle connection errors.
    async fn handle_connection_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        // If there's a critical error, signal to break the loop
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        }).await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        // Display server information
        self.display_server_info();

        // Set up the TCP listener
        let listener = self.setup_listener().await?;

        // Create a semaphore to limit concurrent connections
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_connections));

        // Create a channel for shutdown signaling
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let shutdown_tx = Arc::new(shutdown_tx);

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        // Set up a Ctrl+C handler for graceful shutdown
        Self::setup_ctrl_c_handler(shutdown_tx.clone(), &mut tasks);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                self.router.clone(),
                                self.config.read_buffer_size,
                                &mut tasks
                            ).await;
                        },
                        Err(e) => {
                            if Self::handle_connection_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        // Perform graceful shutdown
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection.
    ///
    /// Reads one request, dispatches it through the routing table, and writes
    /// the response: 400 on a parse failure, 404 when no route matches, 500
    /// when the matched handler fails.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: Arc<Router>,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        // Read data from the socket
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        // Parse the HTTP request
        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                let response = HttpResponse::new(StatusCode::BadRequest)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Error parsing request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ParseError(e));
            }
        };

        let path = request.path.clone();

        // Dispatch through the routing table, first match wins
        match router.dispatch(request).await {
            Dispatch::Matched(Ok(response)) => {
                socket.write_all(&response.to_bytes()).await?;
                Ok(())
            }
            Dispatch::Matched(Err(e)) => {
                let response = HttpResponse::new(StatusCode::InternalServerError)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Internal server error: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                Err(e)
            }
            Dispatch::NotFound => {
                let response = HttpResponse::new(StatusCode::NotFound)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Not found: {path}"));
                socket.write_all(&response.to_bytes()).await?;
                Err(Error::NotFound(path))
            }
        }
    }
}
