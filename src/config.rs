use clap::Parser;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

/// Default read timeout applied to every connection, in seconds
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 5;
/// Default write timeout applied to every connection, in seconds
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 5;

/// Server configuration, parsed from the command line
#[derive(Debug, Clone, Parser)]
#[command(name = "hello_server")]
#[command(about = "Minimal HTTP server answering /hello with a static greeting")]
#[command(version)]
pub struct Config {
    /// Host the server listens on
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port the server listens on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

/// Connection timeout settings
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            read_timeout: DEFAULT_READ_TIMEOUT_SECS,
            write_timeout: DEFAULT_WRITE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Parse configuration from the process arguments
    pub fn load() -> Self {
        Self::parse()
    }

    /// Listen address as a `host:port` string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the listen address to a socket address.
    ///
    /// Goes through `ToSocketAddrs` so hostname values like the default
    /// `localhost` resolve, not just numeric IPs.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        let address = self.address();
        address.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no addresses resolved for {address}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::try_parse_from(["hello_server"]).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_cli_overrides() {
        let config =
            Config::try_parse_from(["hello_server", "--host", "0.0.0.0", "--port", "3000"])
                .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::try_parse_from(["hello_server", "--port", "notaport"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_socket_addr_numeric_host() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 9000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_socket_addr_resolves_localhost() {
        let config = Config {
            host: "localhost".to_string(),
            port: 8080,
        };
        let addr = config.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = Config {
            host: "not a host name".to_string(),
            port: 8080,
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_default_timeouts() {
        let performance = PerformanceConfig::default();
        assert_eq!(performance.read_timeout, 5);
        assert_eq!(performance.write_timeout, 5);
    }
}
