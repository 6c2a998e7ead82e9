//! HTTP protocol layer module
//!
//! Wire-level pieces of the protocol, decoupled from connection handling:
//! request line parsing, MIME type inference and raw response writing.

pub mod mime;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::RequestLine;
pub use response::{write_error, write_success_header, HttpError};
