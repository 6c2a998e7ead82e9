//! Request handler module
//!
//! Business logic for serving files out of the document root.

pub mod static_files;

// Re-export main entry points
pub use static_files::{regular_file_length, resolve_path, stream_file};
