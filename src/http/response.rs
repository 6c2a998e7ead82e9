//! Raw HTTP response writing module
//!
//! Responses are written line by line straight onto the connection; nothing
//! is materialized as a response object. Every header line is
//! CRLF-terminated, and a success header block runs directly into the file
//! bytes with no separating blank line.

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Connection-close header sent with every response. The trailing space
/// before the CRLF is part of the wire format.
const CONNECTION_CLOSE: &str = "Connection: close ";

/// The closed set of error responses this server can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpError {
    BadRequest,
    NotFound,
    NotImplemented,
    /// Part of the response vocabulary but never produced by any
    /// request-handling path; unexpected failures close the connection
    /// without a response instead.
    InternalError,
}

impl HttpError {
    /// `(status line, explanation sentence)` pair for this error.
    const fn entry(self) -> (&'static str, &'static str) {
        match self {
            Self::BadRequest => (
                "HTTP/1.1 400 Bad Request",
                "The connection was interrupted due to bad request.",
            ),
            Self::NotFound => (
                "HTTP/1.1 404 Not Found",
                "The resource that you requested does not exist on this server.",
            ),
            Self::NotImplemented => (
                "HTTP/1.1 501 Not Implemented",
                "The method isn't implemented.",
            ),
            Self::InternalError => (
                "HTTP/1.1 500 Internal Server Error",
                "The connection was interrupted due to unexpected error.",
            ),
        }
    }

    /// Status line sent for this error.
    pub const fn status_line(self) -> &'static str {
        self.entry().0
    }

    /// Numeric status code, used for access logging.
    pub const fn code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::NotImplemented => 501,
            Self::InternalError => 500,
        }
    }

    /// HTML body naming the error.
    pub fn body(self) -> String {
        let (status_line, message) = self.entry();
        let reason = status_line.trim_start_matches("HTTP/1.1 ");
        format!(
            "<html><head><title>Error</title></head><body> \
             <h2>Error: {reason}</h2> <p>{message}</p> </body></html>"
        )
    }
}

/// Write one CRLF-terminated line.
async fn write_line<W>(out: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\r\n").await
}

/// Write the success header block: status line, close indicator, content
/// type and content length. The caller streams the file bytes immediately
/// after; no blank line separates them from the headers.
pub async fn write_success_header<W>(
    out: &mut W,
    content_type: &str,
    length: u64,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_line(out, "HTTP/1.1 200 OK").await?;
    write_line(out, CONNECTION_CLOSE).await?;
    write_line(out, &format!("Content-type: {content_type}")).await?;
    write_line(out, &format!("Content-Length: {length}")).await
}

/// Write a complete error response: headers, a blank line, then a short
/// HTML body naming the error.
pub async fn write_error<W>(out: &mut W, error: HttpError) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_line(out, error.status_line()).await?;
    write_line(out, CONNECTION_CLOSE).await?;
    write_line(out, "Content-type: text/plain").await?;
    write_line(out, "").await?;
    write_line(out, &error.body()).await
}
