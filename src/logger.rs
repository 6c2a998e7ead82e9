//! Logger module
//!
//! Human-readable server logs on stdout/stderr plus one access log line per
//! completed response, in Common Log Format.

use chrono::Local;
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static file server started successfully");
    println!("Listening on: http://{addr}");
    println!("Document root: {}", config.resources.document_root);
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Error while communicating with client: {err:?}");
}

pub fn log_request(method: &str, target: &str) {
    println!("[Request] {method} {target}");
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("[Access] {}", entry.format_common());
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[Error] Failed to create listening socket on {addr}: {err}");
}

pub fn log_accept_failed(err: &std::io::Error) {
    eprintln!("[Error] Server socket shut down unexpectedly: {err}");
    eprintln!("[Error] Exiting.");
}

/// Access log entry for one completed response.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// Method from the request line, `-` when none was parsed
    pub method: String,
    /// Requested path, `-` when none was parsed
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}
