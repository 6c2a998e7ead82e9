//! Static file serving module
//!
//! Resolves requested paths against the document root and streams file
//! contents to the client.

use tokio::fs::File;
use tokio::io::{self, AsyncWrite};

/// Resolve a requested path to a candidate file path.
///
/// The requested path is appended to the document root verbatim. Nothing is
/// URL-decoded or normalized, so `..` segments escape the root.
pub fn resolve_path(document_root: &str, target: &str) -> String {
    format!("{document_root}{target}")
}

/// Byte length of the target when it is a readable regular file.
///
/// Opening the file is what proves it can be read; the handle is dropped
/// again before returning. Directories and missing or unreadable paths
/// return `None`, and the caller answers all of those with 404.
pub async fn regular_file_length(path: &str) -> Option<u64> {
    let file = File::open(path).await.ok()?;
    let metadata = file.metadata().await.ok()?;
    if metadata.is_file() {
        Some(metadata.len())
    } else {
        None
    }
}

/// Copy the file's bytes to `out` in on-disk order, returning the count.
///
/// The file handle is dropped on every exit path, including mid-transfer
/// failure; open and read errors propagate to the caller.
pub async fn stream_file<W>(path: &str, out: &mut W) -> io::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut file = File::open(path).await?;
    io::copy(&mut file, out).await
}
