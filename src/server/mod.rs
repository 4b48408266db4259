// Server module entry point
// Server lifecycle wrapper: construction, listener creation and accept loop

pub mod connection;
pub mod listener;

// Re-export commonly used functions
pub use listener::create_listener;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{Config, PerformanceConfig};
use crate::handler::{hello, Router};
use crate::logger;

/// HTTP server: launch timestamp, network parameters and route table.
///
/// Constructed once at process start, never mutated, destroyed only by
/// process termination.
pub struct Server {
    launched: DateTime<Utc>,
    config: Config,
    performance: PerformanceConfig,
    router: Router,
}

impl Server {
    /// Create a server with the greeting route registered
    pub fn new(config: Config) -> Self {
        let mut router = Router::new();
        router.handle("/hello", hello::hello);

        Self {
            launched: Utc::now(),
            config,
            performance: PerformanceConfig::default(),
            router,
        }
    }

    pub const fn launched(&self) -> &DateTime<Utc> {
        &self.launched
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn performance(&self) -> &PerformanceConfig {
        &self.performance
    }

    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Accept connections until process termination.
    ///
    /// Accept errors are transient: they are logged and the loop continues.
    pub async fn run(self: Arc<Self>, listener: TcpListener) {
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    connection::accept_connection(stream, peer_addr, &self);
                }
                Err(e) => {
                    logger::log_error(&format!("Failed to accept connection: {e}"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::router::RequestContext;
    use hyper::Method;

    #[test]
    fn test_new_server_has_greeting_route() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        let server = Server::new(config);

        let method = Method::GET;
        let response = server.router().dispatch(&RequestContext {
            method: &method,
            path: "/hello",
        });
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_new_server_carries_timeouts() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        let server = Server::new(config);
        assert_eq!(server.performance().read_timeout, 5);
        assert_eq!(server.performance().write_timeout, 5);
        assert_eq!(server.config().port, 8080);
    }
}
