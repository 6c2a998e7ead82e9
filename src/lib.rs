//! Minimal HTTP/1.1 static file server
//!
//! Serves exactly one GET request per TCP connection from a fixed document
//! root, then closes the connection. Built on the Tokio runtime with one
//! spawned task per accepted connection.
//!
//! Module layout:
//! - `http`: wire-level pieces (request line, MIME table, raw responses)
//! - `handler`: path resolution and file streaming
//! - `server`: listening socket, accept loop, per-connection handling
//! - `config`: fixed listening address and document root
//! - `logger`: human-readable server and access logging

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
