// Connection handling module
// Accepts and serves a single TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::handler;
use crate::logger;
use crate::server::Server;

/// Accept a connection: log the peer and hand the stream to a spawned task.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    server: &Arc<Server>,
) {
    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, Arc::clone(server));
}

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures the HTTP/1.1 connection (keep-alive)
/// 3. Serves the connection with the request handler
/// 4. Applies the connection timeout
fn handle_connection(stream: tokio::net::TcpStream, server: Arc<Server>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        // Uniform per-connection deadline derived from the read/write timeouts
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            server.performance().read_timeout,
            server.performance().write_timeout,
        ));

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let server = Arc::clone(&server);
                async move { handler::handle_request(req, server).await }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection timeout after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}
