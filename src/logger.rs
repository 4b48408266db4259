use chrono::{DateTime, Utc};
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

use crate::config::PerformanceConfig;

pub fn log_server_start(
    addr: &SocketAddr,
    launched: &DateTime<Utc>,
    performance: &PerformanceConfig,
) {
    println!("======================================");
    println!("Hello server started successfully");
    println!("Listening on: http://{addr}");
    println!("Launched at: {}", launched.to_rfc3339());
    println!(
        "Read timeout: {}s, write timeout: {}s",
        performance.read_timeout, performance.write_timeout
    );
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: u16, size: u64) {
    println!("[Response] Sent {status} ({size} bytes)");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[ERROR] ✗ Failed to bind {addr}: {err}");
    eprintln!("        Startup aborted");
}
